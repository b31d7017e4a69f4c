//! Sitstand Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the desk bridge needs from a
//! chip-specific HAL. The control logic only ever sees these traits, so it
//! runs unchanged on the RP2040 board and inside host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (sitstand-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sitstand-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ sitstand-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (remote button lines)
//! - [`uart::SerialRx`], [`uart::UartTx`] - Motor controller serial link

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use uart::{ReadError, SerialRx, UartConfig, UartTx};
