//! `SimulationConfig` — the configuration knobs enumerated in §6.
//!
//! A flat, `Clone + Debug` struct constructed via `Default` plus field
//! overrides rather than a builder, since these fields have no
//! interdependencies beyond the simple range checks `validate` performs.
//! Keys that name an external collaborator's job (`osm_file`, `logging`, the
//! CLI front end) have no field here — they're out of this core's scope per
//! §1/§6.

use s4r_sim::{SpeedConstants, SpeedModel};

use crate::error::{DriverError, DriverResult};

/// Default period between road-construction events, in steps (§6).
pub const DEFAULT_STEPS_BETWEEN_CONSTRUCTION: u64 = 10;

/// Configuration for a [`crate::Driver`] run — §6's enumerated options that
/// are this core's responsibility (not an external collaborator's).
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Base PRNG seed; worker `w`'s seed is `random_seed + 37 * w` (§4.5, §6).
    pub random_seed: u64,
    /// Terminates the driver loop (§6).
    pub max_simulation_steps: u64,
    /// Total trips, split evenly across workers (§6).
    pub number_of_residents: usize,
    /// Number of independent workers (`W` in §4.5/§5).
    pub workers: usize,
    /// Period, in steps, between `road_construction()` events (§6).
    pub steps_between_street_construction: u64,
    /// Integer added to `traffic_load` per edge traversal (§6, default 1).
    pub trip_volume: u32,
    /// If true, worker 0 writes `street_network_<k>`/`traffic_load_<k>`
    /// snapshots through the driver's [`s4r_persistence::PersistenceSink`] (§6).
    pub persist_traffic_load: bool,
    /// Congestion-model constants (§4.3.1, configurable per §6's
    /// `car_length`, `min_breaking_distance`, `braking_deceleration`).
    pub speed_constants: SpeedConstants,
    /// Which congestion formulation to route with (§9's open question).
    pub speed_model: SpeedModel,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            random_seed: 0,
            max_simulation_steps: 100,
            number_of_residents: 0,
            workers: 1,
            steps_between_street_construction: DEFAULT_STEPS_BETWEEN_CONSTRUCTION,
            trip_volume: s4r_sim::DEFAULT_TRIP_VOLUME,
            persist_traffic_load: false,
            speed_constants: SpeedConstants::default(),
            speed_model: SpeedModel::default(),
        }
    }
}

impl SimulationConfig {
    /// Range-check the fields that have a hard constraint; everything else
    /// is either unconstrained or already defends itself (e.g.
    /// `change_maxspeed`'s clamping).
    pub fn validate(&self) -> DriverResult<()> {
        if self.workers == 0 {
            return Err(DriverError::InvalidConfiguration(
                "workers must be at least 1".into(),
            ));
        }
        if self.steps_between_street_construction == 0 {
            return Err(DriverError::InvalidConfiguration(
                "steps_between_street_construction must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
