//! Shared error primitives.
//!
//! Sub-crates define their own error enums grounded in this crate's types
//! and convert errors up the stack via `#[from]`, one error type per crate.

use thiserror::Error;

use crate::NodeId;

/// Errors shared across crates that don't belong to any one sub-crate's
/// narrower error type.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),
}

/// Shorthand result type.
pub type CoreResult<T> = Result<T, CoreError>;
