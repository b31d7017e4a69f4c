//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic and the
//! remote's physical button lines.

pub mod remote;

pub use remote::{RemoteLine, Unconnected};
