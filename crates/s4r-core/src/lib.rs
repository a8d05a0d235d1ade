//! `s4r-core` — foundational types shared by every `s4r-*` crate in the
//! streets4rs traffic simulation.
//!
//! This crate is a dependency of every other `s4r-*` crate. It intentionally
//! has no `s4r-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                              |
//! |-----------|----------------------------------------|
//! | [`ids`]   | `NodeId`, `StreetIndex`                |
//! | [`geo`]   | `GeoPoint`                              |
//! | [`rng`]   | `SimRng`, worker-seed derivation        |
//! | [`error`] | `CoreError`, `CoreResult`                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |
//!           | Required by `s4r-persistence`.                        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{NodeId, StreetIndex};
pub use rng::SimRng;
