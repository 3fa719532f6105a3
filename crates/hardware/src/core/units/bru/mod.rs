//! Branch resolution unit (BRU).
//!
//! Evaluates branch conditions and computes redirect targets in Execute.
//! There is no prediction: fetch continues sequentially and a taken branch
//! or jump flushes the two younger instructions.

use crate::common::constants::JUMP_SEGMENT_MASK;
use crate::core::pipeline::signals::{BranchCond, JumpKind};

/// Branch resolution unit.
#[derive(Debug)]
pub struct BranchUnit;

impl BranchUnit {
    /// Evaluates a conditional branch. All comparisons are signed.
    pub const fn taken(cond: BranchCond, a: u32, b: u32) -> bool {
        let (a, b) = (a as i32, b as i32);
        match cond {
            BranchCond::Eq => a == b,
            BranchCond::Ne => a != b,
            BranchCond::Ltz => a < 0,
            BranchCond::Gez => a >= 0,
            BranchCond::Lez => a <= 0,
            BranchCond::Gtz => a > 0,
        }
    }

    /// Conditional branch target: the branch's own PC plus the sign-extended
    /// displacement scaled by 4. `imm` is already sign-extended.
    pub const fn branch_target(pc: u32, imm: u32) -> u32 {
        pc.wrapping_add(imm << 2)
    }

    /// Unconditional jump target.
    ///
    /// `Absolute` keeps the upper four PC bits and appends the 26-bit word
    /// target; `Register` jumps to operand A.
    pub const fn jump_target(kind: JumpKind, pc: u32, target: u32, a: u32) -> u32 {
        match kind {
            JumpKind::Absolute => (pc & JUMP_SEGMENT_MASK) | (target << 2),
            JumpKind::Register => a,
        }
    }
}
