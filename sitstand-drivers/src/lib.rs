//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in sitstand-core for the desk's wired remote:
//!
//! - GPIO button lines (active-low, optionally inverted)
//! - Timed button chords for presets and the memory button

#![no_std]
#![deny(unsafe_code)]

pub mod remote;
