//! The `Simulation` struct and its per-step algorithm.

use s4r_network::StreetNetwork;
use s4r_trips::Trips;

use crate::congestion::{SpeedConstants, SpeedModel};
use crate::{SimError, SimResult};

/// Default `trip_volume` added to `traffic_load` per edge traversal (§6).
pub const DEFAULT_TRIP_VOLUME: u32 = 1;

/// Holds one worker's street network, trip table, and traffic-load state,
/// and runs the per-step simulation algorithm (§4.3).
///
/// A `Simulation` owns exactly one [`StreetNetwork`] and one trip table —
/// never shared across workers (§3's lifecycle note, §5's "not shared"
/// resource model). Workers in a parallel run each hold their own
/// `Simulation`.
pub struct Simulation {
    network: StreetNetwork,
    trips: Trips,
    jam_tolerance: f64,
    speed_model: SpeedModel,
    constants: SpeedConstants,
    trip_volume: u32,
    step_counter: u64,
    traffic_load: Vec<u32>,
    cumulative_traffic_load: Option<Vec<u32>>,
}

impl Simulation {
    /// Construct a simulation over `network` and `trips` with the given
    /// `jam_tolerance` (clamped to `[0, 1]`). Uses the default
    /// [`SpeedModel::Instantaneous`] model, default [`SpeedConstants`], and
    /// `trip_volume = 1`; override with the `with_*` builder methods before
    /// the first `step()`.
    pub fn new(network: StreetNetwork, trips: Trips, jam_tolerance: f64) -> Self {
        let street_count = network.street_count();
        Self {
            network,
            trips,
            jam_tolerance: jam_tolerance.clamp(0.0, 1.0),
            speed_model: SpeedModel::default(),
            constants: SpeedConstants::default(),
            trip_volume: DEFAULT_TRIP_VOLUME,
            step_counter: 0,
            traffic_load: vec![0; street_count],
            cumulative_traffic_load: None,
        }
    }

    pub fn with_speed_model(mut self, model: SpeedModel) -> Self {
        self.speed_model = model;
        self
    }

    pub fn with_constants(mut self, constants: SpeedConstants) -> Self {
        self.constants = constants;
        self
    }

    pub fn with_trip_volume(mut self, trip_volume: u32) -> Self {
        self.trip_volume = trip_volume;
        self
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn network(&self) -> &StreetNetwork {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut StreetNetwork {
        &mut self.network
    }

    pub fn jam_tolerance(&self) -> f64 {
        self.jam_tolerance
    }

    pub fn step_counter(&self) -> u64 {
        self.step_counter
    }

    /// Current per-street traffic load, indexed by `StreetIndex`. Reset to
    /// zero at the start of every `step()`.
    pub fn traffic_load(&self) -> &[u32] {
        &self.traffic_load
    }

    /// Cumulative traffic load since the last `road_construction()`, if any
    /// steps have folded a total in yet.
    pub fn cumulative_traffic_load(&self) -> Option<&[u32]> {
        self.cumulative_traffic_load.as_deref()
    }

    // ── §4.3.2 step() ───────────────────────────────────────────────────

    /// Run one simulation step: re-weight every street from the previous
    /// step's traffic load, reset the load array, then route every trip and
    /// accumulate new load.
    pub fn step(&mut self) -> SimResult<()> {
        self.step_counter += 1;
        tracing::debug!(step = self.step_counter, "preparing edges");

        // ── Re-weight ──────────────────────────────────────────────────
        // Collect new weights before applying them: `streets()` borrows
        // `self.network` immutably for the duration of iteration, so
        // `set_driving_time` (which needs `&mut self.network`) can't be
        // called from inside the same loop.
        let new_weights: Vec<(s4r_core::StreetIndex, f64)> = self
            .network
            .streets()
            .map(|street| {
                let load = self.traffic_load[street.index.index()];
                let driving_time = self.speed_model.driving_time_secs(
                    street.length_m,
                    street.max_speed_kmh,
                    load,
                    self.jam_tolerance,
                    self.constants,
                );
                (street.index, driving_time)
            })
            .collect();
        for (index, driving_time) in new_weights {
            self.network.set_driving_time(index, driving_time)?;
        }

        // ── Reset ──────────────────────────────────────────────────────
        self.traffic_load.iter_mut().for_each(|l| *l = 0);

        // ── Route and load ────────────────────────────────────────────
        tracing::debug!(origins = self.trips.len(), "routing trips");
        for (&origin, goals) in self.trips.iter() {
            let predecessors = self.network.shortest_paths_from(origin)?;

            for &goal in goals {
                if goal == origin {
                    continue; // trivial trip, no edges traversed
                }
                if !predecessors.contains_key(&goal) {
                    continue; // unreachable goal: not an error, silently skip
                }
                let mut current = goal;
                while current != origin {
                    let predecessor = predecessors[&current];
                    let street_index = self
                        .network
                        .get_street_index(current, predecessor)
                        .expect("predecessor edge must exist in the network");
                    self.traffic_load[street_index.index()] += self.trip_volume;
                    current = predecessor;
                }
            }
        }

        Ok(())
    }

    // ── §4.3.3 fold_total() ────────────────────────────────────────────

    /// Replace this worker's `traffic_load` with the driver-reduced `total`,
    /// and accumulate `total` into `cumulative_traffic_load` (zero-initialized
    /// on first use).
    pub fn fold_total(&mut self, total: &[u32]) {
        debug_assert_eq!(total.len(), self.traffic_load.len());
        self.traffic_load.copy_from_slice(total);

        let cumulative = self
            .cumulative_traffic_load
            .get_or_insert_with(|| vec![0; total.len()]);
        for (c, t) in cumulative.iter_mut().zip(total) {
            *c += t;
        }
    }

    // ── §4.3.4 road_construction() ──────────────────────────────────────

    /// Rank streets by cumulative load and adjust the bottom 15%'s and top
    /// 5%'s speed limits by ∓20 km/h, skipping clamped no-ops by advancing
    /// the cutoff toward the other end. Zeroes `cumulative_traffic_load`
    /// when done.
    pub fn road_construction(&mut self) -> SimResult<()> {
        self.road_construction_with(0.15, 0.95, -20, 20)
    }

    /// Parameterized form of [`Self::road_construction`] — the percentile
    /// cutoffs and the speed deltas are design constants per §4.3.4,
    /// exposed here as configuration.
    pub fn road_construction_with(
        &mut self,
        decrease_fraction: f64,
        increase_fraction: f64,
        decrease_delta: i32,
        increase_delta: i32,
    ) -> SimResult<()> {
        let Some(cumulative) = self.cumulative_traffic_load.take() else {
            return Ok(());
        };

        let n = cumulative.len();
        let mut ranked: Vec<usize> = (0..n).collect();
        // Stable sort by cumulative load ascending, ties broken by street
        // index (already the case: `ranked` starts in index order and
        // `sort_by_key` is stable) — per §9's road-construction-determinism
        // note.
        ranked.sort_by_key(|&i| cumulative[i]);

        let mut decrease_cutoff = (decrease_fraction * n as f64).floor() as i64;
        let mut increase_cutoff = (increase_fraction * n as f64).floor() as i64;

        let mut i: i64 = 0;
        loop {
            let j = n as i64 - 1 - i;

            if i <= decrease_cutoff && i < n as i64 {
                let idx = s4r_core::StreetIndex(ranked[i as usize] as u32);
                if !self.network.change_maxspeed(idx, decrease_delta)? {
                    decrease_cutoff += 1;
                }
            }
            if j >= increase_cutoff && j >= 0 {
                let idx = s4r_core::StreetIndex(ranked[j as usize] as u32);
                if !self.network.change_maxspeed(idx, increase_delta)? {
                    increase_cutoff -= 1;
                }
            }

            if decrease_cutoff >= increase_cutoff {
                break;
            }
            i += 1;
            if i >= n as i64 {
                break;
            }
        }

        tracing::info!(
            step = self.step_counter,
            streets = n,
            "road construction complete"
        );
        Ok(())
    }
}
