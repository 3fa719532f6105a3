//! ALU logical and comparison operations.

use crate::core::pipeline::signals::AluOp;

/// Executes a bitwise or set-less-than operation. Returns `0` for other opcodes.
///
/// SLT/SLTI compare the operands as signed 32-bit integers and produce 0 or 1.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Nor => !(a | b),
        AluOp::Slt => u32::from((a as i32) < (b as i32)),
        _ => 0,
    }
}
