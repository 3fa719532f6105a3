//! ALU arithmetic operations.
//!
//! ADD/ADDU/SUB/SUBU and their immediate forms all wrap modulo 2^32; the
//! overflow trap of ADD/SUB/ADDI is outside the modelled machine.

use crate::core::pipeline::signals::AluOp;

/// Executes an add or subtract. Returns `0` for other opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
