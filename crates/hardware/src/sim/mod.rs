//! Simulation driver and program loading.
//!
//! Provides the hex program loader and the `Simulator`, which owns the CPU
//! and exposes the clock (`step`/`run`) and inspection surface used by
//! front ends.

/// Hex program image parsing.
pub mod loader;

/// Clock driver and collaborator API.
pub mod simulator;

pub use simulator::{RunSummary, Simulator, StepReport};
