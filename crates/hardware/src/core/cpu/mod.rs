//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the single context value
//! that owns all processor state. It coordinates the following:
//! 1. **State Management:** Committed and next architectural state.
//! 2. **Pipeline Control:** The four latches, the stall counter, and the
//!    pending branch redirect.
//! 3. **System Integration:** The bus with the memory image.
//! 4. **Observability:** Statistics and per-cycle diagnostics.

/// Per-cycle clock: stage ordering and commit.
pub mod execution;

use crate::common::Diagnostic;
use crate::common::constants::{MEM_TEXT_BEGIN, SYSCALL_EXIT};
use crate::config::Config;
use crate::core::arch::ArchState;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, LatchSnapshot, MemWb};
use crate::soc::System;
use crate::soc::interconnect::Bus;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
#[derive(Debug)]
pub struct Cpu {
    /// Committed architectural state, read by Fetch and Decode.
    pub current: ArchState,
    /// Architectural state being written this cycle; committed at the cycle boundary.
    pub next: ArchState,

    /// IF/ID Latch.
    pub if_id: IfId,
    /// ID/EX Latch.
    pub id_ex: IdEx,
    /// EX/MEM Latch.
    pub ex_mem: ExMem,
    /// MEM/WB Latch.
    pub mem_wb: MemWb,
    /// Entry Writeback is retiring this cycle; overlaid on the register read port.
    pub wb_latch: MemWb,

    /// System bus with the memory image.
    pub bus: Bus,

    /// Set by Writeback when SYSCALL retires with `$v0 == 10`.
    pub halted: bool,
    /// Redirect resolved by Execute in an earlier cycle, consumed by Fetch this cycle.
    pub branch_pending: Option<u32>,
    /// Redirect resolved by Execute this cycle; becomes `branch_pending` at commit.
    pub branch_resolved: Option<u32>,
    /// Cycles Fetch and Decode remain frozen for a data hazard.
    pub stall_cycles: u32,
    /// Forwarding paths enabled.
    pub forwarding: bool,
    /// Emit per-cycle latch traces.
    pub trace: bool,

    /// Performance statistics.
    pub stats: SimStats,
    /// Non-fatal conditions raised since the last drain.
    pub diagnostics: Vec<Diagnostic>,
}

impl Cpu {
    /// Creates a CPU with zeroed state and the PC at the text base.
    ///
    /// # Arguments
    ///
    /// * `system` - The system containing the bus and memory regions.
    /// * `config` - The simulator configuration parameters.
    pub fn new(system: System, config: &Config) -> Self {
        let state = ArchState::new(MEM_TEXT_BEGIN, config.general.hardwire_zero);
        Self {
            current: state.clone(),
            next: state,
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            wb_latch: MemWb::default(),
            bus: system.bus,
            halted: false,
            branch_pending: None,
            branch_resolved: None,
            stall_cycles: 0,
            forwarding: config.general.forwarding,
            trace: config.general.trace_instructions || cfg!(feature = "always-trace"),
            stats: SimStats::default(),
            diagnostics: Vec::new(),
        }
    }

    /// Whether `$0` is hard-wired to zero.
    pub const fn hardwire_zero(&self) -> bool {
        self.current.regs.hardwire_zero()
    }

    /// Copy of the four pipeline latches.
    pub fn latches(&self) -> LatchSnapshot {
        LatchSnapshot {
            if_id: self.if_id,
            id_ex: self.id_ex,
            ex_mem: self.ex_mem,
            mem_wb: self.mem_wb,
        }
    }

    /// Register value as the Decode read port observes it this cycle.
    ///
    /// The register file is written before it is read within a cycle: the
    /// value Writeback is retiring (held in `wb_latch`) takes precedence over
    /// committed state.
    pub fn read_register(&self, idx: usize) -> u32 {
        match &self.wb_latch.entry {
            Some(wb) if wb.writes(idx) && !(idx == 0 && self.hardwire_zero()) => wb.result(),
            _ => self.current.regs.read(idx),
        }
    }

    /// Whether MEM/WB holds an exit SYSCALL, which retires next cycle and
    /// halts the machine before any younger instruction completes.
    pub fn exit_pending(&self) -> bool {
        self.mem_wb
            .entry
            .as_ref()
            .is_some_and(|e| e.ctrl.syscall && e.alu == SYSCALL_EXIT)
    }

    /// Commits `next` into `current` and advances the cycle counter.
    pub fn commit(&mut self) {
        self.current.clone_from(&self.next);
        self.branch_pending = self.branch_resolved.take();
        self.stats.cycles += 1;
    }
}
