//! Board-agnostic core logic for the sit-stand desk bridge
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Frame reader and link health tracking
//! - Position controller (bang-bang seek toward a target height)
//! - Height request validation
//! - Remote button panel, presets and memory macros
//! - Per-tick orchestration ([`desk::Desk`])
//! - Host command line protocol
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod desk;
pub mod host;
pub mod link;
pub mod remote;
pub mod traits;

pub use desk::{Desk, Ingest, TickReport};
