//! Instruction encoding and the typed instruction representation.
//!
//! Provides:
//! 1. **Field extraction:** `InstructionBits` pulls the fixed MIPS32 fields out
//!    of a raw word.
//! 2. **Typed form:** `Instruction`, a tagged union over the R, I, and J
//!    formats. Words are decoded into it once, in the Decode stage; nothing
//!    downstream looks at opcode or function bits again.
//! 3. **Operand queries:** which registers an instruction reads and writes,
//!    which drive hazard detection.

use crate::isa::abi::{REG_RA, REG_V0};

/// Bit shift of the opcode field (bits 31-26).
const OPCODE_SHIFT: u32 = 26;
/// Bit mask of the opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift of the `rs` field (bits 25-21).
const RS_SHIFT: u32 = 21;
/// Bit shift of the `rt` field (bits 20-16).
const RT_SHIFT: u32 = 16;
/// Bit shift of the `rd` field (bits 15-11).
const RD_SHIFT: u32 = 11;
/// Bit shift of the shift-amount field (bits 10-6).
const SHAMT_SHIFT: u32 = 6;
/// Bit mask of any 5-bit register or shift-amount field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask of the function field (bits 5-0).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask of the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask of the 26-bit jump target field.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Primary opcode (bits 31-26).
    fn opcode(&self) -> u32;
    /// First source register (bits 25-21).
    fn rs(&self) -> usize;
    /// Second source / I-type destination register (bits 20-16).
    fn rt(&self) -> usize;
    /// R-type destination register (bits 15-11).
    fn rd(&self) -> usize;
    /// Shift amount (bits 10-6).
    fn shamt(&self) -> u32;
    /// Function code (bits 5-0).
    fn funct(&self) -> u32;
    /// Raw 16-bit immediate (bits 15-0).
    fn imm16(&self) -> u16;
    /// 26-bit jump target (bits 25-0).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Operations encoded in the R (register) format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ROp {
    /// `rd = rt << shamt`
    Sll,
    /// `rd = rt >> shamt` (logical)
    Srl,
    /// `rd = rt >> shamt` (arithmetic)
    Sra,
    /// `pc = rs`
    Jr,
    /// `rd = pc + 4; pc = rs`
    Jalr,
    /// Service call selected by `$v0`.
    Syscall,
    /// `rd = HI`
    Mfhi,
    /// `HI = rs`
    Mthi,
    /// `rd = LO`
    Mflo,
    /// `LO = rs`
    Mtlo,
    /// `HI:LO = rs * rt` (signed)
    Mult,
    /// `HI:LO = rs * rt` (unsigned)
    Multu,
    /// `LO = rs / rt; HI = rs % rt` (signed)
    Div,
    /// `LO = rs / rt; HI = rs % rt` (unsigned)
    Divu,
    /// `rd = rs + rt`
    Add,
    /// `rd = rs + rt`
    Addu,
    /// `rd = rs - rt`
    Sub,
    /// `rd = rs - rt`
    Subu,
    /// `rd = rs & rt`
    And,
    /// `rd = rs | rt`
    Or,
    /// `rd = rs ^ rt`
    Xor,
    /// `rd = !(rs | rt)`
    Nor,
    /// `rd = (rs < rt) as u32` (signed)
    Slt,
}

/// Operations encoded in the I (immediate) format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IOp {
    /// Branch if `rs < 0`.
    Bltz,
    /// Branch if `rs >= 0`.
    Bgez,
    /// Branch if `rs == rt`.
    Beq,
    /// Branch if `rs != rt`.
    Bne,
    /// Branch if `rs <= 0`.
    Blez,
    /// Branch if `rs > 0`.
    Bgtz,
    /// `rt = rs + sext(imm)`
    Addi,
    /// `rt = rs + sext(imm)`
    Addiu,
    /// `rt = (rs < sext(imm)) as u32` (signed)
    Slti,
    /// `rt = rs & zext(imm)`
    Andi,
    /// `rt = rs | zext(imm)`
    Ori,
    /// `rt = rs ^ zext(imm)`
    Xori,
    /// `rt = imm << 16`
    Lui,
    /// `rt = sext(mem8[rs + sext(imm)])`
    Lb,
    /// `rt = sext(mem16[rs + sext(imm)])`
    Lh,
    /// `rt = mem32[rs + sext(imm)]`
    Lw,
    /// `mem8[rs + sext(imm)] = rt`
    Sb,
    /// `mem16[rs + sext(imm)] = rt`
    Sh,
    /// `mem32[rs + sext(imm)] = rt`
    Sw,
}

/// Operations encoded in the J (jump) format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JOp {
    /// Jump within the current 256 MiB segment.
    J,
    /// Jump and link (`$ra = pc + 4`).
    Jal,
}

/// A decoded instruction.
///
/// Register fields are kept as `usize` indices in 0-31. The immediate is kept
/// raw; its extension depends on the operation (see [`Instruction::immediate`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Register format.
    R {
        /// Operation.
        op: ROp,
        /// First source.
        rs: usize,
        /// Second source.
        rt: usize,
        /// Destination.
        rd: usize,
        /// Shift amount.
        shamt: u32,
    },
    /// Immediate format.
    I {
        /// Operation.
        op: IOp,
        /// Source / base register.
        rs: usize,
        /// Destination, second comparand, or store source.
        rt: usize,
        /// Raw 16-bit immediate.
        imm: u16,
    },
    /// Jump format.
    J {
        /// Operation.
        op: JOp,
        /// 26-bit word target.
        target: u32,
    },
    /// A word outside the implemented set. Behaves as a no-op.
    Unimplemented(u32),
}

/// The all-zero word, `sll $zero, $zero, 0`.
impl Default for Instruction {
    fn default() -> Self {
        Self::R {
            op: ROp::Sll,
            rs: 0,
            rt: 0,
            rd: 0,
            shamt: 0,
        }
    }
}

/// Sign-extends a 16-bit immediate to 32 bits.
#[inline(always)]
pub const fn sext16(imm: u16) -> u32 {
    imm as i16 as i32 as u32
}

impl Instruction {
    /// Registers read as operand A and operand B.
    ///
    /// Only registers the operation actually consumes are reported, so hazard
    /// detection never stalls on an unused field. SYSCALL reads `$v0`. Store
    /// instructions report `rt` as operand B; Decode routes it to the store
    /// data rather than the ALU.
    pub const fn sources(&self) -> (Option<usize>, Option<usize>) {
        match *self {
            Self::R { op, rs, rt, .. } => match op {
                ROp::Sll | ROp::Srl | ROp::Sra => (None, Some(rt)),
                ROp::Jr | ROp::Jalr | ROp::Mthi | ROp::Mtlo => (Some(rs), None),
                ROp::Syscall => (Some(REG_V0), None),
                ROp::Mfhi | ROp::Mflo => (None, None),
                ROp::Mult
                | ROp::Multu
                | ROp::Div
                | ROp::Divu
                | ROp::Add
                | ROp::Addu
                | ROp::Sub
                | ROp::Subu
                | ROp::And
                | ROp::Or
                | ROp::Xor
                | ROp::Nor
                | ROp::Slt => (Some(rs), Some(rt)),
            },
            Self::I { op, rs, rt, .. } => match op {
                IOp::Beq | IOp::Bne | IOp::Sb | IOp::Sh | IOp::Sw => (Some(rs), Some(rt)),
                IOp::Lui => (None, None),
                IOp::Bltz
                | IOp::Bgez
                | IOp::Blez
                | IOp::Bgtz
                | IOp::Addi
                | IOp::Addiu
                | IOp::Slti
                | IOp::Andi
                | IOp::Ori
                | IOp::Xori
                | IOp::Lb
                | IOp::Lh
                | IOp::Lw => (Some(rs), None),
            },
            Self::J { .. } | Self::Unimplemented(_) => (None, None),
        }
    }

    /// Register written through the RegWrite path, if any.
    pub const fn dest(&self) -> Option<usize> {
        match *self {
            Self::R { op, rd, .. } => match op {
                ROp::Sll
                | ROp::Srl
                | ROp::Sra
                | ROp::Jalr
                | ROp::Mfhi
                | ROp::Mflo
                | ROp::Add
                | ROp::Addu
                | ROp::Sub
                | ROp::Subu
                | ROp::And
                | ROp::Or
                | ROp::Xor
                | ROp::Nor
                | ROp::Slt => Some(rd),
                _ => None,
            },
            Self::I { op, rt, .. } => match op {
                IOp::Addi
                | IOp::Addiu
                | IOp::Slti
                | IOp::Andi
                | IOp::Ori
                | IOp::Xori
                | IOp::Lui
                | IOp::Lb
                | IOp::Lh
                | IOp::Lw => Some(rt),
                _ => None,
            },
            Self::J { op: JOp::Jal, .. } => Some(REG_RA),
            Self::J { op: JOp::J, .. } | Self::Unimplemented(_) => None,
        }
    }

    /// The immediate as the datapath consumes it.
    ///
    /// Arithmetic, compare, branch, and memory offsets are sign-extended from
    /// 16 bits; logical immediates are zero-extended; LUI is pre-shifted into
    /// the upper half. Non-immediate forms return 0.
    pub const fn immediate(&self) -> u32 {
        match *self {
            Self::I { op, imm, .. } => match op {
                IOp::Andi | IOp::Ori | IOp::Xori => imm as u32,
                IOp::Lui => (imm as u32) << 16,
                _ => sext16(imm),
            },
            _ => 0,
        }
    }

    /// Shift amount for SLL/SRL/SRA, 0 otherwise.
    pub const fn shamt(&self) -> u32 {
        match *self {
            Self::R { shamt, .. } => shamt,
            _ => 0,
        }
    }

    /// 26-bit jump target for J/JAL, 0 otherwise.
    pub const fn target(&self) -> u32 {
        match *self {
            Self::J { target, .. } => target,
            _ => 0,
        }
    }

    /// Whether the instruction reads data memory.
    pub const fn is_load(&self) -> bool {
        matches!(
            self,
            Self::I {
                op: IOp::Lb | IOp::Lh | IOp::Lw,
                ..
            }
        )
    }

    /// Whether the instruction writes data memory.
    pub const fn is_store(&self) -> bool {
        matches!(
            self,
            Self::I {
                op: IOp::Sb | IOp::Sh | IOp::Sw,
                ..
            }
        )
    }

    /// Whether the instruction can redirect the PC.
    pub const fn is_control(&self) -> bool {
        matches!(
            self,
            Self::R {
                op: ROp::Jr | ROp::Jalr,
                ..
            } | Self::I {
                op: IOp::Bltz | IOp::Bgez | IOp::Beq | IOp::Bne | IOp::Blez | IOp::Bgtz,
                ..
            } | Self::J { .. }
        )
    }
}
