//! `s4r-network` error type.

use thiserror::Error;

use s4r_core::NodeId;

/// Errors produced by [`crate::StreetNetwork`].
///
/// Graph precondition violations are programmer errors in the sense of §7 of
/// the design spec: they signal that the caller built an inconsistent
/// request (duplicate node, missing endpoint, unknown street) rather than a
/// recoverable runtime condition, and are surfaced immediately rather than
/// silently ignored.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("node {0} already exists")]
    DuplicateNode(NodeId),

    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("invalid driving time {0}: must be > 0")]
    InvalidWeight(f64),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
