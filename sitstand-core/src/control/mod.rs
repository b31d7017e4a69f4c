//! # Height Control
//!
//! The desk has no positioning command, only up and down buttons. Control
//! is bang-bang: hold the button toward the target and let go once the
//! reported height is close enough.
//!
//! ## Modules
//!
//! - [`position`] - Idle / seeking state machine evaluated every tick.
//! - [`request`] - Validation of requested target heights.

pub mod position;
pub mod request;

pub use position::{Decision, Drive, Motion, MotionEvent, PositionController};
pub use request::{validate_height_request, RequestError, RequestOutcome};
