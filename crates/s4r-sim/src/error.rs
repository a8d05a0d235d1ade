//! `s4r-sim` error type.

use thiserror::Error;

use s4r_network::NetworkError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type SimResult<T> = Result<T, SimError>;
