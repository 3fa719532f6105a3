//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried across the four stage
//! boundaries of the 5-stage pipeline: IF/ID, ID/EX, EX/MEM, MEM/WB.
//!
//! 1. **Single occupancy:** each latch holds at most one instruction.
//! 2. **Bubbles:** an empty latch (`entry == None`, the default) is a bubble.
//! 3. **Typed payload:** from ID/EX onward entries carry the decoded
//!    `Instruction` and its `ControlSignals`; raw bits are kept only for display.

use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::Instruction;

/// Entry in the IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub word: u32,
}

/// Entry in the ID/EX latch (Decode to Execute).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub word: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// Register read as operand A.
    pub rs: Option<usize>,
    /// Register read as operand B (or store data).
    pub rt: Option<usize>,
    /// Destination register.
    pub rd: Option<usize>,
    /// Operand A value.
    pub a: u32,
    /// Operand B value.
    pub b: u32,
    /// Extended immediate.
    pub imm: u32,
    /// Shift amount.
    pub shamt: u32,
    /// 26-bit jump target.
    pub target: u32,
    /// Value a store writes to memory.
    pub store_data: u32,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
}

/// Entry in the EX/MEM latch (Execute to Memory).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub word: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// Destination register.
    pub rd: Option<usize>,
    /// ALU result, or effective address for loads and stores.
    pub alu: u32,
    /// Value a store writes to memory.
    pub store_data: u32,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
}

/// Entry in the MEM/WB latch (Memory to Writeback).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub word: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// Destination register.
    pub rd: Option<usize>,
    /// ALU result (non-loads).
    pub alu: u32,
    /// Loaded memory value (loads).
    pub lmd: u32,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
}

impl ExMemEntry {
    /// Returns `true` if this entry will write register `reg`.
    pub fn writes(&self, reg: usize) -> bool {
        self.ctrl.reg_write && self.rd == Some(reg)
    }
}

impl MemWbEntry {
    /// Returns `true` if this entry will write register `reg`.
    pub fn writes(&self, reg: usize) -> bool {
        self.ctrl.reg_write && self.rd == Some(reg)
    }

    /// The value Writeback commits: the loaded value for loads, otherwise the ALU result.
    pub const fn result(&self) -> u32 {
        if self.ctrl.mem_read { self.lmd } else { self.alu }
    }
}

/// A single-slot pipeline latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Latch<T> {
    /// The resident instruction, or `None` for a bubble.
    pub entry: Option<T>,
}

impl<T> Default for Latch<T> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<T> Latch<T> {
    /// Creates a latch holding `entry`.
    pub const fn holding(entry: T) -> Self {
        Self { entry: Some(entry) }
    }
}

impl<T> PipelineLatch for Latch<T> {
    fn flush(&mut self) {
        self.entry = None;
    }

    fn squash(&mut self) -> bool {
        self.entry.take().is_some()
    }

    fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

/// IF/ID pipeline latch.
pub type IfId = Latch<IfIdEntry>;
/// ID/EX pipeline latch.
pub type IdEx = Latch<IdExEntry>;
/// EX/MEM pipeline latch.
pub type ExMem = Latch<ExMemEntry>;
/// MEM/WB pipeline latch.
pub type MemWb = Latch<MemWbEntry>;

/// Copy of all four latches at a cycle boundary, for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatchSnapshot {
    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MEM latch.
    pub ex_mem: ExMem,
    /// MEM/WB latch.
    pub mem_wb: MemWb,
}
