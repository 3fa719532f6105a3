//! Simulator: owns the CPU and drives the clock.
//!
//! The `Simulator` is the surface a front end (CLI, shell, tests) talks to:
//! 1. **Program management:** load an image at the text base and keep it for `reset`.
//! 2. **Clock:** `step` advances one cycle; `run` variants advance many.
//! 3. **Inspection:** committed state, latch snapshots, statistics, and memory.
//! 4. **Mutation:** register, HI/LO, memory, and forwarding setters.

use std::path::Path;

use tracing::{debug, info};

use crate::common::constants::{MEM_TEXT_BEGIN, NUM_REGS, WORD_BYTES};
use crate::common::{Diagnostic, SimError, SimResult};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::ArchState;
use crate::core::pipeline::latches::LatchSnapshot;
use crate::sim::loader;
use crate::soc::System;
use crate::soc::interconnect::Bus;
use crate::soc::memory::Region;
use crate::stats::SimStats;

/// Outcome of a single clock cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// Cycle number just completed (1-based).
    pub cycle: u64,
    /// Whether the exit SYSCALL retired during this cycle.
    pub halted: bool,
    /// Whether an instruction left Writeback during this cycle.
    pub retired: bool,
    /// Non-fatal conditions raised during this cycle.
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome of a multi-cycle run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cycles executed by this call.
    pub cycles: u64,
    /// Instructions retired by this call.
    pub retired: u64,
    /// Whether the machine is halted at the end of the run.
    pub halted: bool,
    /// Non-fatal conditions raised during the run.
    pub diagnostics: Vec<Diagnostic>,
}

/// Top-level simulator: CPU, configuration, and the loaded program image.
#[derive(Debug)]
pub struct Simulator {
    cpu: Cpu,
    config: Config,
    program: Vec<u32>,
}

impl Simulator {
    /// Creates a simulator with an empty memory image and the PC at the text base.
    pub fn new(config: Config) -> Self {
        let cpu = Self::build_cpu(&config);
        Self {
            cpu,
            config,
            program: Vec::new(),
        }
    }

    fn build_cpu(config: &Config) -> Cpu {
        let system = System::new(&config.memory);
        Cpu::new(system, config)
    }

    /// Places `words` at the text base and remembers them for `reset`.
    ///
    /// The machine is reset first, so loading always starts a fresh run.
    ///
    /// # Errors
    ///
    /// `ProgramTooLarge` if the image does not fit in the text region.
    pub fn load_program(&mut self, words: &[u32]) -> SimResult<()> {
        let capacity = (Region::Text.size(&self.config.memory) / WORD_BYTES) as usize;
        if words.len() > capacity {
            return Err(SimError::ProgramTooLarge {
                words: words.len(),
                capacity,
            });
        }
        self.program = words.to_vec();
        self.reset();
        info!(words = words.len(), "program loaded");
        Ok(())
    }

    /// Reads a hex program image from disk and loads it.
    ///
    /// # Errors
    ///
    /// Propagates loader failures and `ProgramTooLarge`.
    pub fn load_program_file(&mut self, path: impl AsRef<Path>) -> SimResult<()> {
        let words = loader::load_program_file(path.as_ref())?;
        self.load_program(&words)
    }

    /// Returns the machine to its power-on state and reloads the stored program.
    ///
    /// Registers, HI/LO, memory, latches, control flags, and statistics are
    /// cleared. The forwarding setting is kept.
    pub fn reset(&mut self) {
        let forwarding = self.cpu.forwarding;
        self.cpu = Self::build_cpu(&self.config);
        self.cpu.forwarding = forwarding;
        self.cpu.bus.load_words(MEM_TEXT_BEGIN, &self.program);
        debug!(forwarding, "simulator reset");
    }

    /// Advances exactly one clock cycle.
    ///
    /// # Errors
    ///
    /// `AlreadyHalted` if the exit SYSCALL has already retired; state is untouched.
    pub fn step(&mut self) -> SimResult<StepReport> {
        if self.cpu.halted {
            return Err(SimError::AlreadyHalted {
                cycle: self.cpu.stats.cycles,
            });
        }
        let retired_before = self.cpu.stats.instructions_retired;
        self.cpu.tick();
        Ok(StepReport {
            cycle: self.cpu.stats.cycles,
            halted: self.cpu.halted,
            retired: self.cpu.stats.instructions_retired > retired_before,
            diagnostics: std::mem::take(&mut self.cpu.diagnostics),
        })
    }

    /// Advances up to `cycles` cycles, stopping early on halt.
    ///
    /// # Errors
    ///
    /// `AlreadyHalted` if called while halted.
    pub fn run(&mut self, cycles: u64) -> SimResult<RunSummary> {
        if self.cpu.halted {
            return Err(SimError::AlreadyHalted {
                cycle: self.cpu.stats.cycles,
            });
        }
        let mut summary = RunSummary::default();
        while summary.cycles < cycles {
            let report = self.step()?;
            summary.cycles += 1;
            summary.retired += u64::from(report.retired);
            summary.diagnostics.extend(report.diagnostics);
            if report.halted {
                break;
            }
        }
        summary.halted = self.cpu.halted;
        Ok(summary)
    }

    /// Runs until halt or `max_cycles`, whichever comes first.
    ///
    /// # Errors
    ///
    /// `AlreadyHalted` if called while halted.
    pub fn run_bounded(&mut self, max_cycles: u64) -> SimResult<RunSummary> {
        let summary = self.run(max_cycles)?;
        if !summary.halted {
            info!(max_cycles, "cycle bound reached before halt");
        }
        Ok(summary)
    }

    /// Runs until halt, bounded by the configured `max_cycles`.
    ///
    /// # Errors
    ///
    /// `AlreadyHalted` if called while halted.
    pub fn run_to_completion(&mut self) -> SimResult<RunSummary> {
        self.run_bounded(self.config.general.max_cycles)
    }

    /// Committed architectural state (PC, registers, HI/LO).
    pub const fn state(&self) -> &ArchState {
        &self.cpu.current
    }

    /// Snapshot of the four pipeline latches.
    pub fn latches(&self) -> LatchSnapshot {
        self.cpu.latches()
    }

    /// Whether the exit SYSCALL has retired.
    pub const fn is_halted(&self) -> bool {
        self.cpu.halted
    }

    /// Cycles completed since the last reset.
    pub const fn cycle(&self) -> u64 {
        self.cpu.stats.cycles
    }

    /// Performance counters.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// The memory image.
    pub const fn memory(&self) -> &Bus {
        &self.cpu.bus
    }

    /// Configuration the simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Enables or disables the forwarding paths. Takes effect from the next Decode.
    pub const fn set_forwarding(&mut self, enabled: bool) {
        self.cpu.forwarding = enabled;
    }

    /// Whether forwarding paths are enabled.
    pub const fn forwarding_enabled(&self) -> bool {
        self.cpu.forwarding
    }

    /// Writes a general-purpose register in both committed and next state.
    ///
    /// # Errors
    ///
    /// `InvalidRegister` if `idx` is not in 0-31.
    pub fn set_register(&mut self, idx: usize, val: u32) -> SimResult<()> {
        if idx >= NUM_REGS {
            return Err(SimError::InvalidRegister(idx));
        }
        self.cpu.current.regs.write(idx, val);
        self.cpu.next.regs.write(idx, val);
        Ok(())
    }

    /// Sets HI in both committed and next state.
    pub const fn set_hi(&mut self, val: u32) {
        self.cpu.current.hi = val;
        self.cpu.next.hi = val;
    }

    /// Sets LO in both committed and next state.
    pub const fn set_lo(&mut self, val: u32) {
        self.cpu.current.lo = val;
        self.cpu.next.lo = val;
    }

    /// Writes one word of memory. Unmapped addresses are ignored.
    pub fn write_memory(&mut self, addr: u32, word: u32) {
        self.cpu.bus.write_u32(addr, word);
    }
}
