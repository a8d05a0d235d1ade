//! `s4r-persistence` — opaque byte persistence of street networks and
//! per-edge load arrays for the streets4rs traffic simulation (§4.4).
//!
//! The core treats persistence purely as a sink/source keyed by step
//! number; this crate supplies the two payload encodings spec.md calls for
//! and two [`PersistenceSink`] backends.
//!
//! | Module    | Contents                                                  |
//! |-----------|-------------------------------------------------------------|
//! | [`array`] | Little-endian `u32` array, DEFLATE-compressed               |
//! | [`object`]| Bincode-encoded `StreetNetwork` snapshot                     |
//! | [`sink`]  | [`PersistenceSink`] trait, [`MemorySink`], [`FsSink`]        |
//! | [`error`] | [`PersistenceError`]                                         |

pub mod array;
pub mod error;
pub mod object;
pub mod sink;

#[cfg(test)]
mod tests;

pub use array::{decode_array, encode_array};
pub use error::{PersistenceError, PersistenceResult};
pub use object::{decode_network, encode_network};
pub use sink::{network_key, traffic_load_key, FsSink, MemorySink, PersistenceSink};
