//! Architectural state: PC, general registers, HI/LO.

use crate::core::arch::gpr::Gpr;

/// Programmer-visible machine state.
///
/// The CPU keeps two copies. Fetch and Decode read `current`; Execute,
/// Memory, Writeback, and Fetch's PC update write `next`; `next` is copied
/// into `current` once all five stages have run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArchState {
    /// Program counter.
    pub pc: u32,
    /// General-purpose registers.
    pub regs: Gpr,
    /// HI multiply/divide register.
    pub hi: u32,
    /// LO multiply/divide register.
    pub lo: u32,
}

impl ArchState {
    /// Zeroed state with the given PC.
    pub const fn new(pc: u32, hardwire_zero: bool) -> Self {
        Self {
            pc,
            regs: Gpr::new(hardwire_zero),
            hi: 0,
            lo: 0,
        }
    }
}
