//! MIPS32 encoding tables.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31-26).
//! - `funct`: Function codes (bits 5-0) under the SPECIAL opcode.
//! - `regimm`: `rt`-field selectors under the REGIMM opcode.

/// Function codes for SPECIAL (R-type) instructions.
pub mod funct;

/// Primary opcodes.
pub mod opcodes;

/// REGIMM selectors (BLTZ/BGEZ).
pub mod regimm;
