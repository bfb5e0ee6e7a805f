//! Tracing and logging (shared setup).
//!
//! Binaries call [`tracing::init`] once at startup, before doing any work.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;
