//! Instruction Disassembler for the MIPS32 subset.
//!
//! Renders a typed [`Instruction`] as assembler text for trace logging, the
//! CLI, and test diagnostics. `Display` uses numeric register names
//! (`$3`); [`disassemble_abi`] uses conventional names (`$v1`).
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x2401_0005), "addiu $1, $0, 5");
//! ```

use std::fmt;

use crate::isa::abi;
use crate::isa::decode::decode;
use crate::isa::instruction::{IOp, Instruction, JOp, ROp};

/// Register naming style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RegStyle {
    Numeric,
    Abi,
}

/// Register operand formatter.
struct Reg(usize, RegStyle);

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.1 {
            RegStyle::Numeric => write!(f, "${}", self.0),
            RegStyle::Abi => write!(f, "${}", abi::name(self.0)),
        }
    }
}

impl ROp {
    /// Lower-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Jr => "jr",
            Self::Jalr => "jalr",
            Self::Syscall => "syscall",
            Self::Mfhi => "mfhi",
            Self::Mthi => "mthi",
            Self::Mflo => "mflo",
            Self::Mtlo => "mtlo",
            Self::Mult => "mult",
            Self::Multu => "multu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Add => "add",
            Self::Addu => "addu",
            Self::Sub => "sub",
            Self::Subu => "subu",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Nor => "nor",
            Self::Slt => "slt",
        }
    }
}

impl IOp {
    /// Lower-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Bltz => "bltz",
            Self::Bgez => "bgez",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blez => "blez",
            Self::Bgtz => "bgtz",
            Self::Addi => "addi",
            Self::Addiu => "addiu",
            Self::Slti => "slti",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Xori => "xori",
            Self::Lui => "lui",
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
        }
    }
}

impl JOp {
    /// Lower-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::J => "j",
            Self::Jal => "jal",
        }
    }
}

fn render(inst: &Instruction, style: RegStyle, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let r = |idx| Reg(idx, style);
    match *inst {
        Instruction::R {
            op,
            rs,
            rt,
            rd,
            shamt,
        } => {
            let m = op.mnemonic();
            match op {
                ROp::Sll | ROp::Srl | ROp::Sra => write!(f, "{m} {}, {}, {shamt}", r(rd), r(rt)),
                ROp::Jr | ROp::Mthi | ROp::Mtlo => write!(f, "{m} {}", r(rs)),
                ROp::Jalr => write!(f, "{m} {}, {}", r(rd), r(rs)),
                ROp::Syscall => f.write_str(m),
                ROp::Mfhi | ROp::Mflo => write!(f, "{m} {}", r(rd)),
                ROp::Mult | ROp::Multu | ROp::Div | ROp::Divu => {
                    write!(f, "{m} {}, {}", r(rs), r(rt))
                }
                _ => write!(f, "{m} {}, {}, {}", r(rd), r(rs), r(rt)),
            }
        }
        Instruction::I { op, rs, rt, imm } => {
            let m = op.mnemonic();
            let simm = imm as i16;
            match op {
                IOp::Bltz | IOp::Bgez | IOp::Blez | IOp::Bgtz => {
                    write!(f, "{m} {}, {simm}", r(rs))
                }
                IOp::Beq | IOp::Bne => write!(f, "{m} {}, {}, {simm}", r(rs), r(rt)),
                IOp::Andi | IOp::Ori | IOp::Xori => {
                    write!(f, "{m} {}, {}, {imm:#x}", r(rt), r(rs))
                }
                IOp::Lui => write!(f, "{m} {}, {imm:#x}", r(rt)),
                IOp::Lb | IOp::Lh | IOp::Lw | IOp::Sb | IOp::Sh | IOp::Sw => {
                    write!(f, "{m} {}, {simm}({})", r(rt), r(rs))
                }
                IOp::Addi | IOp::Addiu | IOp::Slti => {
                    write!(f, "{m} {}, {}, {simm}", r(rt), r(rs))
                }
            }
        }
        Instruction::J { op, target } => write!(f, "{} {:#010x}", op.mnemonic(), target << 2),
        Instruction::Unimplemented(word) => write!(f, ".word {word:#010x}"),
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, RegStyle::Numeric, f)
    }
}

/// Adapter that renders an instruction with conventional register names.
struct AbiNames<'a>(&'a Instruction);

impl fmt::Display for AbiNames<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.0, RegStyle::Abi, f)
    }
}

/// Disassembles a raw word with numeric register names.
pub fn disassemble(word: u32) -> String {
    decode(word).to_string()
}

/// Disassembles a raw word with conventional register names (`$v0`, `$ra`).
pub fn disassemble_abi(word: u32) -> String {
    AbiNames(&decode(word)).to_string()
}
