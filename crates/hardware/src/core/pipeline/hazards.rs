//! Data Hazard Detection and Forwarding.
//!
//! This module implements the hazard/forwarding controller consulted by the
//! Decode stage. It provides:
//! 1. **Hazard Detection:** For each source operand, finds the youngest
//!    in-flight producer in EX/MEM or MEM/WB.
//! 2. **Decisions:** Collapses that into one `HazardDecision` per operand:
//!    no hazard, forward from EX/MEM, forward from MEM/WB, or stall.
//! 3. **Operand Forwarding:** Supplies the forwarded value for a decision.
//!
//! Timing assumes Decode runs after Execute and Memory in the same cycle, so
//! EX/MEM holds the instruction immediately ahead of the one being decoded and
//! MEM/WB the one two ahead. The register read port sees a value retiring in
//! Writeback during the same cycle, which is what makes these stall counts
//! sufficient:
//!
//! | Producer in | Forwarding off | Forwarding on                      |
//! |-------------|----------------|------------------------------------|
//! | EX/MEM      | stall 2        | forward ALU result (load: stall 1) |
//! | MEM/WB      | stall 1        | forward ALU result or loaded value |

use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::isa::Instruction;

/// Resolution of one source operand for the current cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HazardDecision {
    /// No in-flight producer; the register file value is current.
    #[default]
    None,
    /// Take the ALU result from the EX/MEM latch.
    ForwardExMem,
    /// Take the ALU result or loaded value from the MEM/WB latch.
    ForwardMemWb,
    /// Hold the instruction in Decode for this many cycles.
    Stall(u32),
}

impl HazardDecision {
    /// Stall cycles this decision demands (0 unless `Stall`).
    pub const fn stall_cycles(self) -> u32 {
        match self {
            Self::Stall(n) => n,
            _ => 0,
        }
    }

    /// Whether the operand value comes from a latch instead of the register file.
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::ForwardExMem | Self::ForwardMemWb)
    }
}

/// Decisions for both source operands of one instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperandHazards {
    /// Operand A (`rs`, or `$v0` for SYSCALL).
    pub a: HazardDecision,
    /// Operand B (`rt`, or store data).
    pub b: HazardDecision,
}

impl OperandHazards {
    /// Cycles the instruction must wait before it can leave Decode.
    pub fn stall_cycles(&self) -> u32 {
        self.a.stall_cycles().max(self.b.stall_cycles())
    }
}

/// Classifies a single source register against the in-flight producers.
///
/// # Arguments
///
/// * `src` - Register read by the operand, `None` if the operand is unused.
/// * `ex_mem` - EX/MEM latch as produced by Execute this cycle.
/// * `mem_wb` - MEM/WB latch as produced by Memory this cycle.
/// * `forwarding` - Whether forwarding paths are enabled.
/// * `hardwire_zero` - Whether register 0 is the constant zero (never a hazard).
pub fn classify_operand(
    src: Option<usize>,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
    forwarding: bool,
    hardwire_zero: bool,
) -> HazardDecision {
    let Some(reg) = src else {
        return HazardDecision::None;
    };
    if hardwire_zero && reg == 0 {
        return HazardDecision::None;
    }

    if let Some(producer) = ex_mem.entry.as_ref().filter(|e| e.writes(reg)) {
        return if !forwarding {
            HazardDecision::Stall(2)
        } else if producer.ctrl.mem_read {
            HazardDecision::Stall(1)
        } else {
            HazardDecision::ForwardExMem
        };
    }

    if mem_wb.entry.as_ref().is_some_and(|e| e.writes(reg)) {
        return if forwarding {
            HazardDecision::ForwardMemWb
        } else {
            HazardDecision::Stall(1)
        };
    }

    HazardDecision::None
}

/// Runs the controller for both operands of `inst`.
pub fn detect(
    inst: &Instruction,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
    forwarding: bool,
    hardwire_zero: bool,
) -> OperandHazards {
    let (a, b) = inst.sources();
    OperandHazards {
        a: classify_operand(a, ex_mem, mem_wb, forwarding, hardwire_zero),
        b: classify_operand(b, ex_mem, mem_wb, forwarding, hardwire_zero),
    }
}

/// Value supplied by a forwarding decision, or `None` if the decision does
/// not forward (or the latch has since been emptied).
pub fn forwarded_value(decision: HazardDecision, ex_mem: &ExMem, mem_wb: &MemWb) -> Option<u32> {
    match decision {
        HazardDecision::ForwardExMem => ex_mem.entry.as_ref().map(|e| e.alu),
        HazardDecision::ForwardMemWb => mem_wb.entry.as_ref().map(|e| e.result()),
        HazardDecision::None | HazardDecision::Stall(_) => None,
    }
}
