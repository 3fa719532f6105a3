//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage, plus the
//! multiply/divide unit that writes HI/LO.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub (wrapping modulo 2^32)
//! - [`logic`]:      And, Or, Xor, Nor, Slt
//! - [`shifts`]:     Sll, Srl, Sra
//! - [`muldiv`]:     Mult, Multu, Div, Divu, Mthi, Mtlo

/// Integer add and subtract.
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Multiply/divide unit (HI/LO).
pub mod muldiv;

/// Shift operations.
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit for 32-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op`    - The ALU operation to perform
    /// * `a`     - Operand A (`rs` value)
    /// * `b`     - Operand B (`rt` value or extended immediate)
    /// * `shamt` - Shift amount for the shift operations
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, u32::MAX, 1, 0), 0);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10, 0), 1);
    /// assert_eq!(Alu::execute(AluOp::Sra, 0x8000_0000, 0x8000_0000, 4), 0xF800_0000);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32, shamt: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Nor | AluOp::Slt => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, b, shamt),
            AluOp::PassA => a,
            AluOp::PassB => b,
        }
    }
}
