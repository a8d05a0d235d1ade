//! Object-payload encoding (§4.4) for `StreetNetwork`: a bincode-encoded
//! snapshot mirroring its externally observable state — nodes with
//! coordinates, streets with endpoints/length/max_speed/driving_time, and
//! the street-index assignment implied by array order.
//!
//! The wire format is implementation-defined (spec.md only requires
//! round-trip fidelity); this one follows the pack's prevailing
//! serde-derive-plus-bincode pattern rather than the source's pickle
//! format.

use serde::{Deserialize, Serialize};

use s4r_core::{GeoPoint, NodeId};
use s4r_network::StreetNetwork;

use crate::error::PersistenceResult;

#[derive(Serialize, Deserialize)]
struct NodeRecord {
    id: NodeId,
    pos: GeoPoint,
}

#[derive(Serialize, Deserialize)]
struct StreetRecord {
    u: NodeId,
    v: NodeId,
    length_m: f64,
    max_speed_kmh: u32,
    driving_time_secs: f64,
}

/// The full round-trippable state of a `StreetNetwork`: nodes in insertion
/// order, streets in ascending `StreetIndex` order (so replaying `streets`
/// through `add_street` on an empty network reassigns identical indices).
#[derive(Serialize, Deserialize)]
struct NetworkSnapshot {
    nodes: Vec<NodeRecord>,
    streets: Vec<StreetRecord>,
}

/// Encode `network`'s full state — nodes, streets, and every per-street
/// attribute including the current `driving_time` — with bincode.
pub fn encode_network(network: &StreetNetwork) -> PersistenceResult<Vec<u8>> {
    let nodes = network
        .nodes()
        .map(|id| NodeRecord {
            id,
            pos: network
                .node_coords(id)
                .expect("node id from StreetNetwork::nodes() always resolves"),
        })
        .collect();

    let streets = network
        .streets()
        .map(|s| StreetRecord {
            u: s.u,
            v: s.v,
            length_m: s.length_m,
            max_speed_kmh: s.max_speed_kmh,
            driving_time_secs: network.driving_time(s.index),
        })
        .collect();

    Ok(bincode::serialize(&NetworkSnapshot { nodes, streets })?)
}

/// Decode a network previously encoded with [`encode_network`].
///
/// Rebuilds the network node-by-node then street-by-street in snapshot
/// order, so `add_street` reassigns the same dense `StreetIndex`es the
/// network had when persisted, then restores each street's exact
/// `driving_time` (which `add_street` alone would only set to the
/// free-flow value).
pub fn decode_network(bytes: &[u8]) -> PersistenceResult<StreetNetwork> {
    let snapshot: NetworkSnapshot = bincode::deserialize(bytes)?;

    let mut network = StreetNetwork::new();
    for node in &snapshot.nodes {
        network
            .add_node(node.id, node.pos.lon, node.pos.lat)
            .expect("snapshot nodes are unique by construction");
    }
    for street in &snapshot.streets {
        let index = network
            .add_street(street.u, street.v, street.length_m, street.max_speed_kmh)
            .expect("snapshot streets reference existing, non-duplicate endpoints");
        network
            .set_driving_time(index, street.driving_time_secs)
            .expect("persisted driving_time is always > 0");
    }
    Ok(network)
}
