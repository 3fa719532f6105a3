//! Pipeline control signals and operation types.
//!
//! This module defines the signals that steer an instruction through the
//! back half of the pipeline. It performs:
//! 1. **Operation selection:** ALU, multiply/divide, HI/LO, branch, and jump kinds.
//! 2. **Operand selection:** whether operand B comes from a register or the immediate.
//! 3. **Memory and writeback control:** access width, RegWrite, and SYSCALL handling.
//!
//! Signals are derived once, in Decode, from the typed instruction.

use crate::isa::{IOp, Instruction, JOp, ROp};

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition. Also used for effective-address computation.
    #[default]
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
    /// Set less than (signed).
    Slt,
    /// Shift left logical by `shamt`.
    Sll,
    /// Shift right logical by `shamt`.
    Srl,
    /// Shift right arithmetic by `shamt`.
    Sra,
    /// Pass operand A through.
    PassA,
    /// Pass operand B through.
    PassB,
}

/// Multiply/divide unit operations (results go to HI/LO).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MulDivOp {
    /// Signed 32x32 -> 64 multiply.
    Mult,
    /// Unsigned 32x32 -> 64 multiply.
    Multu,
    /// Signed divide.
    Div,
    /// Unsigned divide.
    Divu,
    /// Move operand A to HI.
    Mthi,
    /// Move operand A to LO.
    Mtlo,
}

/// Source of a MFHI/MFLO result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HiLoRead {
    /// Read HI.
    Hi,
    /// Read LO.
    Lo,
}

/// Conditional branch comparisons. All are signed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// `a == b`
    Eq,
    /// `a != b`
    Ne,
    /// `a < 0`
    Ltz,
    /// `a >= 0`
    Gez,
    /// `a <= 0`
    Lez,
    /// `a > 0`
    Gtz,
}

/// Unconditional jump target sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpKind {
    /// Segment-relative 26-bit word target (J, JAL).
    Absolute,
    /// Target taken from operand A (JR, JALR).
    Register,
}

/// Memory access width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// No memory access.
    #[default]
    Nop,
    /// 8 bits.
    Byte,
    /// 16 bits.
    Half,
    /// 32 bits.
    Word,
}

/// Control signals carried by the ID/EX and later latches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Writeback writes the result to the destination register.
    pub reg_write: bool,
    /// Memory stage performs a load.
    pub mem_read: bool,
    /// Memory stage performs a store.
    pub mem_write: bool,
    /// Load/store width.
    pub width: MemWidth,
    /// ALU operation.
    pub alu: AluOp,
    /// Operand B is the extended immediate rather than the `rt` value.
    pub b_imm: bool,
    /// Multiply/divide unit operation.
    pub muldiv: Option<MulDivOp>,
    /// Result is read from HI or LO.
    pub hilo_read: Option<HiLoRead>,
    /// Conditional branch comparison.
    pub branch: Option<BranchCond>,
    /// Unconditional jump.
    pub jump: Option<JumpKind>,
    /// Result is the return address `pc + 4`.
    pub link: bool,
    /// SYSCALL: Writeback inspects the result (`$v0`) for the exit code.
    pub syscall: bool,
}

impl ControlSignals {
    /// Derives the control signals for a decoded instruction.
    ///
    /// `Unimplemented` yields the all-default signals, i.e. a no-op.
    pub fn for_instruction(inst: &Instruction) -> Self {
        let base = Self {
            reg_write: inst.dest().is_some(),
            ..Self::default()
        };
        match *inst {
            Instruction::R { op, .. } => {
                let alu = |alu| Self { alu, ..base };
                match op {
                    ROp::Sll => alu(AluOp::Sll),
                    ROp::Srl => alu(AluOp::Srl),
                    ROp::Sra => alu(AluOp::Sra),
                    ROp::Add | ROp::Addu => alu(AluOp::Add),
                    ROp::Sub | ROp::Subu => alu(AluOp::Sub),
                    ROp::And => alu(AluOp::And),
                    ROp::Or => alu(AluOp::Or),
                    ROp::Xor => alu(AluOp::Xor),
                    ROp::Nor => alu(AluOp::Nor),
                    ROp::Slt => alu(AluOp::Slt),
                    ROp::Jr => Self {
                        jump: Some(JumpKind::Register),
                        ..base
                    },
                    ROp::Jalr => Self {
                        jump: Some(JumpKind::Register),
                        link: true,
                        ..base
                    },
                    ROp::Syscall => Self {
                        alu: AluOp::PassA,
                        syscall: true,
                        ..base
                    },
                    ROp::Mfhi => Self {
                        hilo_read: Some(HiLoRead::Hi),
                        ..base
                    },
                    ROp::Mflo => Self {
                        hilo_read: Some(HiLoRead::Lo),
                        ..base
                    },
                    ROp::Mthi => muldiv(base, MulDivOp::Mthi),
                    ROp::Mtlo => muldiv(base, MulDivOp::Mtlo),
                    ROp::Mult => muldiv(base, MulDivOp::Mult),
                    ROp::Multu => muldiv(base, MulDivOp::Multu),
                    ROp::Div => muldiv(base, MulDivOp::Div),
                    ROp::Divu => muldiv(base, MulDivOp::Divu),
                }
            }
            Instruction::I { op, .. } => {
                let imm = |alu| Self {
                    alu,
                    b_imm: true,
                    ..base
                };
                match op {
                    IOp::Addi | IOp::Addiu => imm(AluOp::Add),
                    IOp::Slti => imm(AluOp::Slt),
                    IOp::Andi => imm(AluOp::And),
                    IOp::Ori => imm(AluOp::Or),
                    IOp::Xori => imm(AluOp::Xor),
                    IOp::Lui => imm(AluOp::PassB),
                    IOp::Lb => load(base, MemWidth::Byte),
                    IOp::Lh => load(base, MemWidth::Half),
                    IOp::Lw => load(base, MemWidth::Word),
                    IOp::Sb => store(base, MemWidth::Byte),
                    IOp::Sh => store(base, MemWidth::Half),
                    IOp::Sw => store(base, MemWidth::Word),
                    IOp::Beq => branch(base, BranchCond::Eq),
                    IOp::Bne => branch(base, BranchCond::Ne),
                    IOp::Bltz => branch(base, BranchCond::Ltz),
                    IOp::Bgez => branch(base, BranchCond::Gez),
                    IOp::Blez => branch(base, BranchCond::Lez),
                    IOp::Bgtz => branch(base, BranchCond::Gtz),
                }
            }
            Instruction::J { op, .. } => Self {
                jump: Some(JumpKind::Absolute),
                link: op == JOp::Jal,
                ..base
            },
            Instruction::Unimplemented(_) => Self::default(),
        }
    }
}

const fn muldiv(base: ControlSignals, op: MulDivOp) -> ControlSignals {
    ControlSignals {
        muldiv: Some(op),
        ..base
    }
}

const fn load(base: ControlSignals, width: MemWidth) -> ControlSignals {
    ControlSignals {
        mem_read: true,
        width,
        b_imm: true,
        ..base
    }
}

const fn store(base: ControlSignals, width: MemWidth) -> ControlSignals {
    ControlSignals {
        mem_write: true,
        width,
        b_imm: true,
        ..base
    }
}

const fn branch(base: ControlSignals, cond: BranchCond) -> ControlSignals {
    ControlSignals {
        branch: Some(cond),
        ..base
    }
}
