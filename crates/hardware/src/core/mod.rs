//! Core processor implementation.
//!
//! This module contains the CPU implementation: the five-stage pipeline, the
//! execution units it drives, the architectural state, and the per-cycle
//! clock that ties them together.

/// Architectural state (register file, PC, HI/LO).
pub mod arch;

/// CPU core implementation and per-cycle clock.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU, multiply/divide, branch resolution, load/store).
pub mod units;

pub use self::cpu::Cpu;
