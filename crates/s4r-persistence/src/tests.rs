//! Unit tests for s4r-persistence, covering the round-trip laws and
//! persistence scenario from the design spec's testable-properties section.

use s4r_core::NodeId;
use s4r_network::StreetNetwork;

use crate::array::{decode_array, encode_array};
use crate::object::{decode_network, encode_network};
use crate::sink::{network_key, traffic_load_key, FsSink, MemorySink, PersistenceSink};
use crate::error::PersistenceError;

fn triangle() -> StreetNetwork {
    let mut net = StreetNetwork::new();
    net.add_node(NodeId(1), 10.5, -2.25).unwrap();
    net.add_node(NodeId(2), 11.0, -2.5).unwrap();
    net.add_node(NodeId(3), 11.5, -2.75).unwrap();
    net.add_street(NodeId(1), NodeId(2), 10.0, 50).unwrap();
    net.add_street(NodeId(2), NodeId(3), 100.0, 140).unwrap();
    net.add_street(NodeId(1), NodeId(3), 200.0, 50).unwrap();
    net
}

mod array_round_trip {
    use super::*;

    #[test]
    fn empty_array_round_trips() {
        let encoded = encode_array(&[]).unwrap();
        assert_eq!(decode_array(&encoded).unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn values_and_length_preserved() {
        let values = vec![0u32, 1, 2_000_000_000, u32::MAX, 42];
        let encoded = encode_array(&values).unwrap();
        let decoded = decode_array(&encoded).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn corrupt_payload_is_rejected() {
        // Not a valid DEFLATE stream at all — flate2 reports an I/O error
        // rather than producing a non-multiple-of-4 buffer, but either
        // failure mode must surface as an error, not a panic or silent
        // truncation.
        let err = decode_array(&[0xff, 0x00, 0x13, 0x37]).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::SnapshotIo(_) | PersistenceError::Corrupt(_)
        ));
    }
}

mod network_round_trip {
    use super::*;

    #[test]
    fn preserves_nodes_edges_indices_and_attributes() {
        let net = triangle();
        let encoded = encode_network(&net).unwrap();
        let restored = decode_network(&encoded).unwrap();

        assert_eq!(restored.node_count(), net.node_count());
        assert_eq!(restored.street_count(), net.street_count());

        for id in net.nodes() {
            assert_eq!(restored.node_coords(id), net.node_coords(id));
        }

        for street in net.streets() {
            let restored_index = restored.get_street_index(street.u, street.v).unwrap();
            assert_eq!(restored_index, street.index, "street_index must round-trip exactly");
            assert_eq!(restored.length(restored_index), street.length_m);
            assert_eq!(restored.max_speed(restored_index), street.max_speed_kmh);
            assert_eq!(
                restored.driving_time(restored_index),
                net.driving_time(street.index)
            );
        }
    }

    #[test]
    fn preserves_driving_time_after_a_reweight() {
        let mut net = triangle();
        let street = net.get_street_index(NodeId(1), NodeId(2)).unwrap();
        net.set_driving_time(street, 3.14159).unwrap();

        let restored = decode_network(&encode_network(&net).unwrap()).unwrap();
        assert_eq!(restored.driving_time(street), 3.14159);
    }
}

mod sinks {
    use super::*;

    #[test]
    fn memory_sink_round_trips_by_key() {
        let mut sink = MemorySink::new();
        sink.write(&network_key(3), &[1, 2, 3]).unwrap();
        sink.write(&traffic_load_key(3), &[9, 9]).unwrap();

        assert_eq!(sink.read(&network_key(3)).unwrap(), vec![1, 2, 3]);
        assert_eq!(sink.read(&traffic_load_key(3)).unwrap(), vec![9, 9]);
    }

    #[test]
    fn memory_sink_unknown_key_is_not_found() {
        let sink = MemorySink::new();
        let err = sink.read("street_network_0").unwrap_err();
        assert!(matches!(err, PersistenceError::NotFound(_)));
    }

    #[test]
    fn fs_sink_round_trips_a_full_snapshot_pair() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FsSink::new(dir.path()).unwrap();

        let net = triangle();
        let net_bytes = encode_network(&net).unwrap();
        let load_bytes = encode_array(&[1, 2, 3]).unwrap();

        sink.write(&network_key(0), &net_bytes).unwrap();
        sink.write(&traffic_load_key(0), &load_bytes).unwrap();

        let restored = decode_network(&sink.read(&network_key(0)).unwrap()).unwrap();
        assert_eq!(restored.street_count(), net.street_count());

        let restored_load = decode_array(&sink.read(&traffic_load_key(0)).unwrap()).unwrap();
        assert_eq!(restored_load, vec![1, 2, 3]);
    }

    #[test]
    fn fs_sink_missing_key_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FsSink::new(dir.path()).unwrap();
        let err = sink.read("nope").unwrap_err();
        assert!(matches!(err, PersistenceError::NotFound(_)));
    }
}
