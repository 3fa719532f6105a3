//! Architectural constants for the MIPS32 subset.
//!
//! Memory map bases and limits for the four regions of the memory image,
//! plus the handful of fixed values the pipeline relies on.

/// Base address of the user text (program) region.
pub const MEM_TEXT_BEGIN: u32 = 0x0040_0000;
/// Last valid address of the user text region.
pub const MEM_TEXT_END: u32 = 0x0FFF_FFFF;

/// Base address of the user data region.
pub const MEM_DATA_BEGIN: u32 = 0x1001_0000;
/// Last valid address of the user data region.
pub const MEM_DATA_END: u32 = 0x7FFF_FFFF;

/// Base address of the kernel text region.
pub const MEM_KTEXT_BEGIN: u32 = 0x8000_0000;
/// Last valid address of the kernel text region.
pub const MEM_KTEXT_END: u32 = 0x8FFF_FFFF;

/// Base address of the kernel data region.
pub const MEM_KDATA_BEGIN: u32 = 0x9000_0000;
/// Last valid address of the kernel data region.
pub const MEM_KDATA_END: u32 = 0xFFFE_FFFF;

/// Size of an instruction or data word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// `v0` value that makes SYSCALL halt the machine.
pub const SYSCALL_EXIT: u32 = 10;

/// Upper PC bits preserved by J/JAL (the current 256 MiB segment).
pub const JUMP_SEGMENT_MASK: u32 = 0xF000_0000;
