//! Motor controller link
//!
//! Reads frames off the motor UART and tracks how healthy the link is.

pub mod reader;
pub mod status;

pub use reader::{poll_frame, LinkFault};
pub use status::LinkStatus;
