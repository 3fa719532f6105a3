//! Cycle-accurate 5-stage MIPS pipeline simulator library.
//!
//! This crate implements a classic in-order IF/ID/EX/MEM/WB pipeline for a
//! MIPS32 integer subset with the following:
//! 1. **Core:** Pipeline stages, latches, RAW hazard detection with optional
//!    forwarding, and flush-on-taken control flow.
//! 2. **Memory:** Four word-addressed regions (text, data, kernel text, kernel
//!    data) behind a bus; unmapped accesses read 0 and discard writes.
//! 3. **ISA:** Decoding and disassembly for the supported instructions.
//! 4. **Simulation:** Program loader, configuration, clock driver, and statistics.
//!
//! ```
//! use mipsim_core::{Config, Simulator};
//!
//! let mut sim = Simulator::new(Config::default());
//! // addiu $2, $0, 10 ; syscall
//! sim.load_program(&[0x2402_000A, 0x0000_000C]).unwrap();
//! let summary = sim.run_to_completion().unwrap();
//! assert!(summary.halted);
//! assert_eq!(sim.state().regs.read(2), 10);
//! ```

/// Common types and constants (memory map, errors, diagnostics).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (pipeline, arch state, execution units).
pub mod core;
/// Instruction set (decode, instruction, ABI names, disassembly).
pub mod isa;
/// Program loader and clock driver.
pub mod sim;
/// System-on-chip (builder, bus, memory regions, traits).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the pipeline, architectural state, and stats.
pub use crate::core::Cpu;
/// Clock driver and inspection surface.
pub use crate::sim::Simulator;
/// Top-level system (bus and memory regions); construct with `System::new`.
pub use crate::soc::System;
