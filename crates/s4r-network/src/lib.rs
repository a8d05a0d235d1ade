//! `s4r-network` — the undirected street network graph and its routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|----------------------------------------------------------|
//! | [`network`] | `StreetNetwork`, `Street`, canonicalization helpers      |
//! | [`router`]  | `shortest_paths_from` (inherent method) and `Predecessors` |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types (via `s4r-core/serde`). |

pub mod error;
pub mod network;
pub mod router;


pub use error::{NetworkError, NetworkResult};
pub use network::{canonical_pair, speed_kmh_to_ms, Street, StreetNetwork, MAX_SPEED_KMH, MIN_SPEED_KMH};
pub use router::Predecessors;
