//! `s4r-trips` — resident trip generation for the streets4rs traffic
//! simulation.
//!
//! Grounded on `project/tripgenerator.py`'s `TripGenerator.generate_trips`:
//! draw `n` samples, each an independent `(origin, goal)` pair sampled with
//! replacement from the candidate sets, and group goals under their origin
//! in the order they were drawn.

use std::collections::HashMap;

use s4r_core::{NodeId, SimRng};

mod error;

pub use error::{TripError, TripResult};

/// Mapping from origin node to the ordered list of goals sampled for it.
///
/// List order is insertion order — the order samples were drawn — per §4.2.
/// Duplicates are permitted: a resident can be assigned the same goal
/// multiple times, each contributing to load independently.
pub type Trips = HashMap<NodeId, Vec<NodeId>>;

/// Total number of individual (origin, goal) trips across a `Trips` table.
pub fn trip_count(trips: &Trips) -> usize {
    trips.values().map(|goals| goals.len()).sum()
}

/// Generate `n` trips by sampling `origins` and `goals` uniformly and
/// independently, with replacement.
///
/// Fails with [`TripError::EmptyCandidateSet`] if either candidate set is
/// empty. Deterministic given a seeded `rng`.
pub fn generate_trips(
    n: usize,
    origins: &[NodeId],
    goals: &[NodeId],
    rng: &mut SimRng,
) -> TripResult<Trips> {
    if origins.is_empty() {
        return Err(TripError::EmptyCandidateSet("origins"));
    }
    if goals.is_empty() {
        return Err(TripError::EmptyCandidateSet("goals"));
    }

    let mut trips: Trips = HashMap::new();
    for _ in 0..n {
        let origin = origins[rng.gen_index(origins.len())];
        let goal = goals[rng.gen_index(goals.len())];
        trips.entry(origin).or_default().push(goal);
    }
    Ok(trips)
}
