//! `s4r-driver` — parallel worker orchestration for the streets4rs traffic
//! simulation: the bulk-synchronous compute → all-reduce → broadcast loop
//! described in §4.5/§5, implemented with `rayon` (a `par_iter` fan-out over
//! independent workers, reduced sequentially by the coordinator).
//!
//! | Module     | Contents                                           |
//! |------------|------------------------------------------------------|
//! | [`config`] | [`SimulationConfig`] — §6's enumerated options        |
//! | [`driver`] | [`Driver`] — per-step protocol, `run`/`run_step`      |
//! | [`error`]  | [`DriverError`]                                       |

pub mod config;
pub mod driver;
pub mod error;


pub use config::SimulationConfig;
pub use driver::Driver;
pub use error::{DriverError, DriverResult};
