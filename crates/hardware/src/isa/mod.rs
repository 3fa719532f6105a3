//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode tables, field extraction, the typed instruction
//! representation, the decoder, and the disassembler for the implemented
//! MIPS32 subset.
//!
//! # Layout
//!
//! * `mips32`: Raw opcode, function, and REGIMM code tables.
//! * `instruction`: Field extraction and the typed `Instruction` variant.
//! * `decode`: Word to `Instruction` decoding (done once, in the Decode stage).
//! * `disasm`: Human-readable rendering for traces and the CLI.

/// Register name mappings (`$zero`, `$v0`, `$ra`, ...).
pub mod abi;

/// Instruction decoding logic for the R, I, and J formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and the typed instruction representation.
pub mod instruction;

/// MIPS32 opcode, function-code, and REGIMM tables.
pub mod mips32;

pub use decode::decode;
pub use instruction::{IOp, Instruction, InstructionBits, JOp, ROp};
