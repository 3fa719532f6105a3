//! Simulator error and diagnostic definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Fatal errors:** `SimError`, returned by fallible simulator operations.
//! 2. **Loader errors:** `LoadError`, for malformed or unreadable program files.
//! 3. **Diagnostics:** Non-fatal conditions reported alongside a step (the
//!    machine keeps running).

use thiserror::Error;

/// Result alias used throughout the simulator.
pub type SimResult<T> = Result<T, SimError>;

/// Errors surfaced by the simulator API.
#[derive(Debug, Error)]
pub enum SimError {
    /// `step` or `run` was called after the SYSCALL exit condition retired.
    #[error("simulator already halted (cycle {cycle})")]
    AlreadyHalted {
        /// Cycle counter at the moment of the call.
        cycle: u64,
    },

    /// A register index outside 0-31 was passed to a setter.
    #[error("register index {0} is out of range (0-31)")]
    InvalidRegister(usize),

    /// The program does not fit in the configured text region.
    #[error("program of {words} words exceeds text region capacity of {capacity} words")]
    ProgramTooLarge {
        /// Number of words in the program.
        words: usize,
        /// Number of words the text region can hold.
        capacity: usize,
    },

    /// The program image could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A configuration document failed to parse.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading a hex program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be opened or read.
    #[error("could not read program file '{path}': {source}")]
    Io {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A non-empty line was not a 32-bit hexadecimal word.
    #[error("line {line}: '{text}' is not a 32-bit hexadecimal word")]
    InvalidWord {
        /// 1-based line number.
        line: usize,
        /// Offending text, trimmed.
        text: String,
    },
}

/// Non-fatal conditions observed during a cycle.
///
/// These never stop the machine; they are collected on the step report so a
/// front end can surface them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// An opcode/function combination outside the implemented set retired.
    /// The instruction flowed through the pipeline as a no-op.
    #[error("instruction {word:#010x} at {pc:#010x} is not implemented")]
    Unimplemented {
        /// Address of the instruction.
        pc: u32,
        /// Raw instruction word.
        word: u32,
    },
}
