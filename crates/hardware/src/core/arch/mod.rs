//! MIPS architectural state.
//!
//! This module contains the programmer-visible machine state:
//! 1. **GPRs:** The 32-entry general-purpose register file.
//! 2. **State:** PC, GPRs, and HI/LO bundled as one value, kept by the CPU as a
//!    committed (`current`) and a being-written (`next`) copy.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Program counter, registers, and HI/LO.
pub mod state;

pub use gpr::Gpr;
pub use state::ArchState;
