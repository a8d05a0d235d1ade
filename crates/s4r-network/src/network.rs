//! Undirected street network representation.
//!
//! # Data layout
//!
//! Streets are stored once per canonical `(min(u, v), max(u, v))` pair and
//! assigned a dense, 0-based [`StreetIndex`] on insertion. Every per-street
//! dynamic quantity (`length_m`, `max_speed_kmh`, `driving_time_secs`) is a
//! flat `Vec` indexed by `StreetIndex` — this is what lets the simulation's
//! `traffic_load`/`cumulative_traffic_load` arrays be plain `Vec<u32>` summed
//! with ordinary element-wise addition (cheap all-reduce across workers).
//!
//! Node adjacency is kept as one `Vec<(dense_neighbor, StreetIndex)>` per
//! node — contiguous per node, so Dijkstra's inner loop over a node's
//! out-edges is a single slice scan. Adjacency grows incrementally as
//! `add_street` is called, since §4.1 specifies `add_street` as a mutating
//! operation on the *live* network rather than on a separate builder type.
//!
//! # External vs. dense node ids
//!
//! `NodeId` (see `s4r_core::ids`) is the external, map-derived identifier and
//! is not assumed dense. `StreetNetwork` keeps a `NodeId -> dense index`
//! lookup (`node_index`) and a reverse `node_ids` array so every public
//! operation can be expressed in terms of the caller-facing `NodeId`.

use std::collections::HashMap;

use s4r_core::{GeoPoint, NodeId, StreetIndex};

use crate::error::{NetworkError, NetworkResult};

/// Minimum allowed speed limit, km/h (§3 invariants).
pub const MIN_SPEED_KMH: u32 = 1;
/// Maximum allowed speed limit, km/h (§3 invariants).
pub const MAX_SPEED_KMH: u32 = 140;

/// Convert a speed limit in km/h to metres/second.
#[inline]
pub fn speed_kmh_to_ms(speed_kmh: u32) -> f64 {
    speed_kmh as f64 * (1000.0 / 3600.0)
}

/// Canonicalize an unordered node pair as `(min, max)`, per §3/§9.
#[inline]
pub fn canonical_pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// One street's attributes, as yielded by [`StreetNetwork::streets`].
#[derive(Copy, Clone, Debug)]
pub struct Street {
    pub index: StreetIndex,
    pub u: NodeId,
    pub v: NodeId,
    pub length_m: f64,
    pub max_speed_kmh: u32,
}

/// Undirected, weighted street network with dense integer-indexed edges.
///
/// See module docs for the data layout rationale. Construct with
/// [`StreetNetwork::new`], populate with [`add_node`](Self::add_node) and
/// [`add_street`](Self::add_street), then query/mutate via the remaining
/// methods for the lifetime of a simulation run.
#[derive(Clone)]
pub struct StreetNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    node_ids: Vec<NodeId>,
    node_index: HashMap<NodeId, u32>,
    node_pos: Vec<GeoPoint>,

    // ── Adjacency (per dense node index) ──────────────────────────────────
    adjacency: Vec<Vec<(u32, StreetIndex)>>,

    // ── Street data (indexed by StreetIndex) ──────────────────────────────
    street_pairs: Vec<(NodeId, NodeId)>,
    street_index_of: HashMap<(NodeId, NodeId), StreetIndex>,
    length_m: Vec<f64>,
    max_speed_kmh: Vec<u32>,
    driving_time_secs: Vec<f64>,
}

impl StreetNetwork {
    /// Construct an empty network with no nodes or streets.
    pub fn new() -> Self {
        Self {
            node_ids: Vec::new(),
            node_index: HashMap::new(),
            node_pos: Vec::new(),
            adjacency: Vec::new(),
            street_pairs: Vec::new(),
            street_index_of: HashMap::new(),
            length_m: Vec::new(),
            max_speed_kmh: Vec::new(),
            driving_time_secs: Vec::new(),
        }
    }

    // ── Dimensions ─────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    pub fn street_count(&self) -> usize {
        self.street_pairs.len()
    }

    // ── Node operations ────────────────────────────────────────────────────

    /// Add a node with the given external id and coordinates.
    ///
    /// Coordinates are immutable after insertion (§3). Fails with
    /// [`NetworkError::DuplicateNode`] if `id` is already present.
    pub fn add_node(&mut self, id: NodeId, lon: f64, lat: f64) -> NetworkResult<()> {
        if self.has_node(id) {
            return Err(NetworkError::DuplicateNode(id));
        }
        let dense = self.node_ids.len() as u32;
        self.node_ids.push(id);
        self.node_index.insert(id, dense);
        self.node_pos.push(GeoPoint::new(lon, lat));
        self.adjacency.push(Vec::new());
        Ok(())
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id)
    }

    /// Coordinates of `id`. `None` if the node doesn't exist.
    pub fn node_coords(&self, id: NodeId) -> Option<GeoPoint> {
        let dense = *self.node_index.get(&id)?;
        Some(self.node_pos[dense as usize])
    }

    /// All node ids currently in the network, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_ids.iter().copied()
    }

    #[inline]
    fn dense_of(&self, id: NodeId) -> Option<u32> {
        self.node_index.get(&id).copied()
    }

    // ── Street operations ───────────────────────────────────────────────────

    /// `true` if the canonical edge `{u, v}` exists.
    pub fn has_street(&self, u: NodeId, v: NodeId) -> bool {
        self.street_index_of.contains_key(&canonical_pair(u, v))
    }

    /// Add an undirected street `{u, v}`.
    ///
    /// Requires both endpoints to already exist and the edge to be absent;
    /// otherwise fails with [`NetworkError::PreconditionFailed`]. Assigns the
    /// next dense `StreetIndex` and sets the initial `driving_time` to the
    /// free-flow time `length_m / speed_kmh_to_ms(max_speed)`.
    pub fn add_street(
        &mut self,
        u: NodeId,
        v: NodeId,
        length_m: f64,
        max_speed_kmh: u32,
    ) -> NetworkResult<StreetIndex> {
        let pair = canonical_pair(u, v);

        if self.has_street(u, v) {
            return Err(NetworkError::PreconditionFailed(format!(
                "street {{{u}, {v}}} already exists"
            )));
        }
        let du = self
            .dense_of(u)
            .ok_or_else(|| NetworkError::PreconditionFailed(format!("endpoint {u} not found")))?;
        let dv = self
            .dense_of(v)
            .ok_or_else(|| NetworkError::PreconditionFailed(format!("endpoint {v} not found")))?;

        let clamped_speed = max_speed_kmh.clamp(MIN_SPEED_KMH, MAX_SPEED_KMH);
        let index = StreetIndex(self.street_pairs.len() as u32);

        self.street_pairs.push(pair);
        self.street_index_of.insert(pair, index);
        self.length_m.push(length_m);
        self.max_speed_kmh.push(clamped_speed);
        self.driving_time_secs
            .push(length_m / speed_kmh_to_ms(clamped_speed));

        self.adjacency[du as usize].push((dv, index));
        self.adjacency[dv as usize].push((du, index));

        tracing::debug!(street = %index, %u, %v, length_m, max_speed_kmh = clamped_speed, "added street");

        Ok(index)
    }

    /// `StreetIndex` of the canonical edge `{u, v}`, if it exists.
    pub fn get_street_index(&self, u: NodeId, v: NodeId) -> Option<StreetIndex> {
        self.street_index_of.get(&canonical_pair(u, v)).copied()
    }

    /// The canonical endpoint pair for `index`, if it exists.
    pub fn get_street_by_index(&self, index: StreetIndex) -> Option<(NodeId, NodeId)> {
        self.street_pairs.get(index.index()).copied()
    }

    /// Current driving-time weight (seconds) of `index`.
    ///
    /// Panics if `index` is out of range; every `StreetIndex` obtained from
    /// this network's own methods is always in range.
    pub fn driving_time(&self, index: StreetIndex) -> f64 {
        self.driving_time_secs[index.index()]
    }

    /// Current speed limit (km/h) of `index`. Panics if out of range.
    pub fn max_speed(&self, index: StreetIndex) -> u32 {
        self.max_speed_kmh[index.index()]
    }

    /// Length (metres) of `index`, immutable since insertion. Panics if out
    /// of range.
    pub fn length(&self, index: StreetIndex) -> f64 {
        self.length_m[index.index()]
    }

    /// Set the driving-time weight (seconds) used by [`Self::shortest_paths_from`].
    ///
    /// `t` must be strictly positive; otherwise fails with
    /// [`NetworkError::InvalidWeight`]. Fails with
    /// [`NetworkError::PreconditionFailed`] if `index` is unknown.
    pub fn set_driving_time(&mut self, index: StreetIndex, t: f64) -> NetworkResult<()> {
        if index.index() >= self.street_count() {
            return Err(NetworkError::PreconditionFailed(format!(
                "unknown street {index}"
            )));
        }
        if !(t > 0.0) {
            return Err(NetworkError::InvalidWeight(t));
        }
        self.driving_time_secs[index.index()] = t;
        Ok(())
    }

    /// Add `delta` (km/h) to `index`'s speed limit, then clamp to
    /// `[MIN_SPEED_KMH, MAX_SPEED_KMH]`.
    ///
    /// Returns `true` if the effective value changed, `false` if clamping
    /// produced a no-op (e.g. already at the limit and `delta` pushes
    /// further past it) — road construction uses this to skip to the next
    /// candidate. Fails with [`NetworkError::PreconditionFailed`] if `index`
    /// is unknown.
    pub fn change_maxspeed(&mut self, index: StreetIndex, delta: i32) -> NetworkResult<bool> {
        if index.index() >= self.street_count() {
            return Err(NetworkError::PreconditionFailed(format!(
                "unknown street {index}"
            )));
        }
        let old = self.max_speed_kmh[index.index()];
        let new = (old as i64 + delta as i64).clamp(MIN_SPEED_KMH as i64, MAX_SPEED_KMH as i64) as u32;
        self.max_speed_kmh[index.index()] = new;
        Ok(new != old)
    }

    /// Iterate over all streets in ascending `StreetIndex` order.
    pub fn streets(&self) -> impl Iterator<Item = Street> + '_ {
        (0..self.street_pairs.len()).map(move |i| {
            let (u, v) = self.street_pairs[i];
            Street {
                index: StreetIndex(i as u32),
                u,
                v,
                length_m: self.length_m[i],
                max_speed_kmh: self.max_speed_kmh[i],
            }
        })
    }

    /// Out-edges of `node` as `(neighbor, StreetIndex)` pairs, in insertion
    /// order. Empty if `node` doesn't exist or has no streets.
    pub(crate) fn adjacency_dense(&self, dense: u32) -> &[(u32, StreetIndex)] {
        &self.adjacency[dense as usize]
    }

    pub(crate) fn dense_node_id(&self, dense: u32) -> NodeId {
        self.node_ids[dense as usize]
    }

    pub(crate) fn dense_index_of(&self, id: NodeId) -> Option<u32> {
        self.dense_of(id)
    }
}

impl Default for StreetNetwork {
    fn default() -> Self {
        Self::new()
    }
}
