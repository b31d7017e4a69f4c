//! Wired remote emulation
//!
//! The remote has four open-drain lines (`hc0`..`hc3`). Single lines and
//! combinations of them are the "buttons" the controller understands.

pub mod panel;
pub mod presets;

pub use panel::{Line, LineMask, Panel, Remote};
pub use presets::{ButtonMacro, Preset, PresetError};
