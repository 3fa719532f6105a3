//! `rt`-field selectors for the REGIMM opcode.

/// Branch on less than zero.
pub const BLTZ: u32 = 0x00;
/// Branch on greater than or equal to zero.
pub const BGEZ: u32 = 0x01;
