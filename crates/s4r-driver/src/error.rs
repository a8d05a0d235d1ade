//! `s4r-driver` error type.

use thiserror::Error;

use s4r_core::CoreError;
use s4r_sim::SimError;
use s4r_trips::TripError;

/// Errors surfaced by [`crate::Driver`].
///
/// Per §7's propagation policy: [`DriverError::Sim`] wraps graph/weight
/// errors, which are fatal and abort every worker; [`DriverError::Trips`]
/// can only occur during worker construction (empty candidate sets);
/// [`DriverError::Core`] covers an `origins`/`goals` candidate referencing a
/// node absent from the network, checked once at construction so a bad
/// candidate set fails fast instead of surfacing later as an opaque
/// [`s4r_network::NetworkError::PreconditionFailed`] from inside a worker's
/// first `step()`; [`DriverError::InvalidConfiguration`] aborts before
/// simulation starts. Snapshot I/O failures are deliberately *not* a
/// `DriverError` variant — they're reported via `tracing::warn!` and
/// otherwise ignored, per §7's "Worker 0 surfaces but does not abort peers'
/// next step."
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    Trips(#[from] TripError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type DriverResult<T> = Result<T, DriverError>;
