//! basic_triangle — smallest example for the streets4rs traffic simulation.
//!
//! Builds the design spec's "Triangle, no congestion" scenario network
//! (three nodes, three streets) and runs a handful of residents commuting
//! 1 → 3 for a few steps, printing the per-street traffic load and max
//! speed at each step boundary. Scale comment: swap in a real network and
//! `number_of_residents` in the thousands to run at production scale.

use anyhow::Result;

use s4r_core::NodeId;
use s4r_driver::{Driver, SimulationConfig};
use s4r_network::StreetNetwork;
use s4r_persistence::MemorySink;

const STEPS: u64 = 6;

fn build_network() -> (StreetNetwork, [NodeId; 3]) {
    let mut net = StreetNetwork::new();
    let n1 = NodeId(1);
    let n2 = NodeId(2);
    let n3 = NodeId(3);
    net.add_node(n1, 0.0, 0.0).unwrap();
    net.add_node(n2, 0.0005, 0.0).unwrap();
    net.add_node(n3, 0.002, 0.0).unwrap();
    net.add_street(n1, n2, 10.0, 50).unwrap();
    net.add_street(n2, n3, 100.0, 140).unwrap();
    net.add_street(n1, n3, 200.0, 50).unwrap();
    (net, [n1, n2, n3])
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== basic_triangle — streets4rs traffic simulation ===");

    let (network, [n1, _n2, n3]) = build_network();
    println!(
        "Street network: {} nodes, {} streets",
        network.node_count(),
        network.street_count()
    );

    let config = SimulationConfig {
        random_seed: 42,
        max_simulation_steps: STEPS,
        number_of_residents: 40,
        workers: 2,
        steps_between_street_construction: 3,
        persist_traffic_load: true,
        ..SimulationConfig::default()
    };
    println!(
        "Residents: {}  Workers: {}  Steps: {}",
        config.number_of_residents, config.workers, config.max_simulation_steps
    );
    println!();

    let mut driver = Driver::new(config, &network, &[n1], &[n3])?;
    let mut sink = MemorySink::new();

    for step in 1..=STEPS {
        driver.run_step(Some(&mut sink))?;

        let worker0 = &driver.workers()[0];
        print!("step {step:>2}  load=[");
        for street in worker0.network().streets() {
            print!("{:>4}", worker0.traffic_load()[street.index.index()]);
        }
        print!("]  max_speed=[");
        for street in worker0.network().streets() {
            print!("{:>4}", worker0.network().max_speed(street.index));
        }
        println!("]");
    }

    println!();
    println!("Snapshots persisted under keys street_network_<k>/traffic_load_<k> for k in 1..={STEPS}.");

    Ok(())
}
