//! Execution units used by the Execute and Memory stages.

/// Integer ALU and multiply/divide unit.
pub mod alu;

/// Branch resolution unit.
pub mod bru;

/// Load/store unit.
pub mod lsu;
