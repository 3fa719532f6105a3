//! Common types and constants.
//!
//! Shared definitions used across the simulator:
//! 1. **Constants:** Memory map bases and limits, word size, and the exit service code.
//! 2. **Errors:** The `SimError` and `LoadError` result types plus non-fatal `Diagnostic`s.

/// Memory map, word size, and service-code constants.
pub mod constants;

/// Error and diagnostic types.
pub mod error;

pub use error::{Diagnostic, LoadError, SimError, SimResult};
