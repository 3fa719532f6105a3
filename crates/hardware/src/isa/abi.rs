//! MIPS register name constants.
//!
//! Conventional (o32) names for the 32 general-purpose registers, used by
//! the disassembler and by the pipeline for the fixed-role registers.

/// `$zero`.
pub const REG_ZERO: usize = 0;
/// `$v0`, holds the SYSCALL service code.
pub const REG_V0: usize = 2;
/// `$ra`, link register written by JAL.
pub const REG_RA: usize = 31;

/// Conventional names for `$0`-`$31`.
const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the conventional name for a register index, or `"??"` if out of range.
pub fn name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("??")
}
