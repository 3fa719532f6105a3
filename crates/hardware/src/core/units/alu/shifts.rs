//! ALU shift operations.
//!
//! The shifted value is operand B (`rt`); the amount is the 5-bit `shamt`
//! field. SRA is a sign-extending shift: `((b as i32) >> shamt) as u32`.

use crate::core::pipeline::signals::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift. Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, value: u32, shamt: u32) -> u32 {
    let sh = shamt & SHAMT_MASK;
    match op {
        AluOp::Sll => value << sh,
        AluOp::Srl => value >> sh,
        AluOp::Sra => ((value as i32) >> sh) as u32,
        _ => 0,
    }
}
