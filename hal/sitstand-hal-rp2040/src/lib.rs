//! RP2040-specific HAL for the desk bridge firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `sitstand-hal` traits:
//!
//! - GPIO outputs for the remote's button lines
//! - Buffered UART receive with peek and per-byte timeout
//! - Blocking UART transmit

#![no_std]

pub mod gpio;
pub mod serial;

pub use gpio::RpOutput;
pub use serial::{BufferedSerial, BufferedSerialTx};
