//! The congestion speed model (§4.3.1 of the design spec).
//!
//! Two formulations are provided. [`SpeedModel::Instantaneous`] is the one
//! actually used by every call site in the original implementation, and is
//! the default. [`SpeedModel::PeriodAveraged`] translates a second,
//! commented-out formulation (`calculate_driving_speed_var`) found in
//! `original_source/project/simulation.py` that is never reached from any
//! call site there — kept here as a selectable alternative rather than
//! silently dropped, per the design spec's resolution of that open question.

/// Physical constants for the congestion speed model. Defaults match §4.3.1.
#[derive(Copy, Clone, Debug)]
pub struct SpeedConstants {
    /// Average car length, metres.
    pub car_length_m: f64,
    /// Minimum braking distance, metres — kept strictly positive to prevent
    /// a zero or negative potential speed.
    pub min_braking_dist_m: f64,
    /// Braking deceleration, m/s².
    pub braking_decel_ms2: f64,
}

impl Default for SpeedConstants {
    fn default() -> Self {
        Self {
            car_length_m: 4.0,
            min_braking_dist_m: 0.001,
            braking_decel_ms2: 7.5,
        }
    }
}

/// Which congestion formulation `Simulation::step` uses to convert traffic
/// load into a driving speed.
#[derive(Copy, Clone, Debug, Default)]
pub enum SpeedModel {
    /// The formula every call site in the original implementation actually
    /// uses: braking distance shrinks as cars pack the street.
    #[default]
    Instantaneous,
    /// An alternate formulation that spreads `number_of_trips` over
    /// `traffic_period_duration_hours` rather than treating them as
    /// simultaneous occupants. See module docs.
    PeriodAveraged { traffic_period_duration_hours: f64 },
}

/// `f(L, V_max, n)` from §4.3.1: the achievable driving speed (km/h) on a
/// street of length `length_m`, speed limit `max_speed_kmh`, currently
/// carrying `number_of_trips` trips.
pub fn calculate_driving_speed(
    length_m: f64,
    max_speed_kmh: u32,
    number_of_trips: u32,
    constants: SpeedConstants,
) -> f64 {
    let space_per_car = length_m / (number_of_trips.max(1) as f64);
    let brake_distance = (space_per_car - constants.car_length_m).max(constants.min_braking_dist_m);
    let potential_speed_ms = (2.0 * constants.braking_decel_ms2 * brake_distance).sqrt();
    (max_speed_kmh as f64).min(potential_speed_ms * 3.6)
}

/// The alternate `calculate_driving_speed_var` formulation, translated
/// directly from `original_source/project/simulation.py`. Spreads trips over
/// `traffic_period_duration_hours` instead of treating them as co-occupants
/// of the street at the same instant.
pub fn calculate_driving_speed_period_averaged(
    max_speed_kmh: u32,
    number_of_trips: u32,
    traffic_period_duration_hours: f64,
    constants: SpeedConstants,
) -> f64 {
    let intermediate = traffic_period_duration_hours * 3600.0 * constants.braking_decel_ms2
        / (number_of_trips.max(1) as f64);
    let potential_speed_ms =
        (intermediate * intermediate + 2.0 * constants.car_length_m * constants.braking_decel_ms2).sqrt()
            + intermediate;
    (max_speed_kmh as f64).min(potential_speed_ms * 3.6)
}

impl SpeedModel {
    fn actual_speed_kmh(
        self,
        length_m: f64,
        max_speed_kmh: u32,
        number_of_trips: u32,
        constants: SpeedConstants,
    ) -> f64 {
        match self {
            SpeedModel::Instantaneous => {
                calculate_driving_speed(length_m, max_speed_kmh, number_of_trips, constants)
            }
            SpeedModel::PeriodAveraged {
                traffic_period_duration_hours,
            } => calculate_driving_speed_period_averaged(
                max_speed_kmh,
                number_of_trips,
                traffic_period_duration_hours,
                constants,
            ),
        }
    }

    /// Compute the driving-time weight (seconds) for a street given its
    /// current traffic load, blending ideal (empty-road) and actual speed by
    /// `jam_tolerance` *before* converting to time, per §4.3.1.
    pub fn driving_time_secs(
        self,
        length_m: f64,
        max_speed_kmh: u32,
        number_of_trips: u32,
        jam_tolerance: f64,
        constants: SpeedConstants,
    ) -> f64 {
        let ideal_speed = self.actual_speed_kmh(length_m, max_speed_kmh, 0, constants);
        let actual_speed = self.actual_speed_kmh(length_m, max_speed_kmh, number_of_trips, constants);
        let perceived_speed = actual_speed + (ideal_speed - actual_speed) * jam_tolerance;
        length_m / (perceived_speed * (1000.0 / 3600.0))
    }
}
