//! Infrastructure Layer: Debugging
//!
//! Provides diagnostic output for the conversion engine.
//!
//! This crate provides:
//! - Installation of the `tracing` subscriber (stderr, level from the
//!   verbosity flag or `RUST_LOG`)
//! - Bounded previews of huge digit strings, so a value with hundreds of
//!   millions of digits can be logged without being printed in full

pub mod debug_utils;

pub use debug_utils::{DebugError, DebugUtils};
