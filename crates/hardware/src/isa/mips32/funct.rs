//! Function codes (bits 5-0) for SPECIAL-opcode instructions.

/// Shift left logical.
pub const SLL: u32 = 0x00;
/// Shift right logical.
pub const SRL: u32 = 0x02;
/// Shift right arithmetic.
pub const SRA: u32 = 0x03;
/// Jump register.
pub const JR: u32 = 0x08;
/// Jump and link register.
pub const JALR: u32 = 0x09;
/// System call.
pub const SYSCALL: u32 = 0x0C;
/// Move from HI.
pub const MFHI: u32 = 0x10;
/// Move to HI.
pub const MTHI: u32 = 0x11;
/// Move from LO.
pub const MFLO: u32 = 0x12;
/// Move to LO.
pub const MTLO: u32 = 0x13;
/// Multiply (signed).
pub const MULT: u32 = 0x18;
/// Multiply unsigned.
pub const MULTU: u32 = 0x19;
/// Divide (signed).
pub const DIV: u32 = 0x1A;
/// Divide unsigned.
pub const DIVU: u32 = 0x1B;
/// Add.
pub const ADD: u32 = 0x20;
/// Add unsigned.
pub const ADDU: u32 = 0x21;
/// Subtract.
pub const SUB: u32 = 0x22;
/// Subtract unsigned.
pub const SUBU: u32 = 0x23;
/// Bitwise AND.
pub const AND: u32 = 0x24;
/// Bitwise OR.
pub const OR: u32 = 0x25;
/// Bitwise XOR.
pub const XOR: u32 = 0x26;
/// Bitwise NOR.
pub const NOR: u32 = 0x27;
/// Set on less than (signed).
pub const SLT: u32 = 0x2A;
