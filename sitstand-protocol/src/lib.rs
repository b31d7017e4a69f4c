//! CB2C Desk Controller Protocol
//!
//! This crate decodes the UART protocol spoken between a sit-stand desk's
//! CB2C motor controller and its wired remote. There is no published
//! specification; the layout below was worked out by watching the bus.
//!
//! # Protocol Overview
//!
//! Every message is a short terminator-delimited frame:
//! ```text
//! ┌──────────┬─────────┬───────────┬────────────┬──────────┬──────┐
//! │ ADDRESS  │ COMMAND │ PARAM_LEN │ PARAMS     │ CHECKSUM │ EOM  │
//! │ 2B       │ 1B      │ 1B        │ 0–3B       │ 1B       │ 0x7E │
//! └──────────┴─────────┴───────────┴────────────┴──────────┴──────┘
//! ```
//!
//! The controller repeats its height report many times a second, so a
//! receiver that drops a garbled frame simply picks up the next one.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod height;
pub mod messages;

pub use frame::{checksum, Frame, FrameError, FRAME_TERMINATOR, MAX_FRAME_LEN, MAX_PARAMS};
pub use height::{HeightReading, HeightUnit, INCH_THRESHOLD};
pub use messages::{MotorMessage, NULL_PACKET, WAKE_PACKET};
