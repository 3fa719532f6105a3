//! MIPS32 Instruction Decoder.
//!
//! Turns a raw 32-bit word into a typed [`Instruction`]. Words whose
//! opcode/function (or REGIMM `rt`) combination is outside the implemented
//! set decode to [`Instruction::Unimplemented`], never to an error.

use crate::isa::instruction::{IOp, Instruction, InstructionBits, JOp, ROp};
use crate::isa::mips32::{funct, opcodes, regimm};

/// Decodes a 32-bit instruction word.
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::{decode, IOp, Instruction};
///
/// // addiu $1, $0, 5
/// let inst = decode(0x2401_0005);
/// assert_eq!(inst, Instruction::I { op: IOp::Addiu, rs: 0, rt: 1, imm: 5 });
/// ```
pub fn decode(word: u32) -> Instruction {
    match word.opcode() {
        opcodes::OP_SPECIAL => decode_special(word),
        opcodes::OP_REGIMM => match word.rt() as u32 {
            regimm::BLTZ => itype(IOp::Bltz, word),
            regimm::BGEZ => itype(IOp::Bgez, word),
            _ => Instruction::Unimplemented(word),
        },
        opcodes::OP_J => Instruction::J {
            op: JOp::J,
            target: word.target(),
        },
        opcodes::OP_JAL => Instruction::J {
            op: JOp::Jal,
            target: word.target(),
        },
        opcodes::OP_BEQ => itype(IOp::Beq, word),
        opcodes::OP_BNE => itype(IOp::Bne, word),
        opcodes::OP_BLEZ => itype(IOp::Blez, word),
        opcodes::OP_BGTZ => itype(IOp::Bgtz, word),
        opcodes::OP_ADDI => itype(IOp::Addi, word),
        opcodes::OP_ADDIU => itype(IOp::Addiu, word),
        opcodes::OP_SLTI => itype(IOp::Slti, word),
        opcodes::OP_ANDI => itype(IOp::Andi, word),
        opcodes::OP_ORI => itype(IOp::Ori, word),
        opcodes::OP_XORI => itype(IOp::Xori, word),
        opcodes::OP_LUI => itype(IOp::Lui, word),
        opcodes::OP_LB => itype(IOp::Lb, word),
        opcodes::OP_LH => itype(IOp::Lh, word),
        opcodes::OP_LW => itype(IOp::Lw, word),
        opcodes::OP_SB => itype(IOp::Sb, word),
        opcodes::OP_SH => itype(IOp::Sh, word),
        opcodes::OP_SW => itype(IOp::Sw, word),
        _ => Instruction::Unimplemented(word),
    }
}

fn decode_special(word: u32) -> Instruction {
    let op = match word.funct() {
        funct::SLL => ROp::Sll,
        funct::SRL => ROp::Srl,
        funct::SRA => ROp::Sra,
        funct::JR => ROp::Jr,
        funct::JALR => ROp::Jalr,
        funct::SYSCALL => ROp::Syscall,
        funct::MFHI => ROp::Mfhi,
        funct::MTHI => ROp::Mthi,
        funct::MFLO => ROp::Mflo,
        funct::MTLO => ROp::Mtlo,
        funct::MULT => ROp::Mult,
        funct::MULTU => ROp::Multu,
        funct::DIV => ROp::Div,
        funct::DIVU => ROp::Divu,
        funct::ADD => ROp::Add,
        funct::ADDU => ROp::Addu,
        funct::SUB => ROp::Sub,
        funct::SUBU => ROp::Subu,
        funct::AND => ROp::And,
        funct::OR => ROp::Or,
        funct::XOR => ROp::Xor,
        funct::NOR => ROp::Nor,
        funct::SLT => ROp::Slt,
        _ => return Instruction::Unimplemented(word),
    };
    Instruction::R {
        op,
        rs: word.rs(),
        rt: word.rt(),
        rd: word.rd(),
        shamt: word.shamt(),
    }
}

#[inline]
fn itype(op: IOp, word: u32) -> Instruction {
    Instruction::I {
        op,
        rs: word.rs(),
        rt: word.rt(),
        imm: word.imm16(),
    }
}
