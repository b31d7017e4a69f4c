//! Configuration types
//!
//! Configuration is compiled into the firmware from `desk.toml`.

pub mod types;

pub use types::{ConfigError, DeskConfig, TravelRange};
