//! `s4r-trips` error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TripError {
    #[error("cannot sample trips from an empty candidate set: {0}")]
    EmptyCandidateSet(&'static str),
}

pub type TripResult<T> = Result<T, TripError>;
