//! MIPS General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs:
//! 1. **Storage:** Maintains `$0`-`$31` as 32-bit words.
//! 2. **Register zero:** When hard-wired, `$0` reads as 0 and ignores writes;
//!    otherwise it behaves as an ordinary register.
//! 3. **Bounds:** Out-of-range indices read 0 and drop writes.

use std::fmt;

use tracing::debug;

use crate::common::constants::NUM_REGS;
use crate::isa::abi;

/// General-Purpose Register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
    hardwire_zero: bool,
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Gpr {
    /// Creates a zeroed register file.
    ///
    /// # Arguments
    ///
    /// * `hardwire_zero` - Whether `$0` is the constant zero.
    pub const fn new(hardwire_zero: bool) -> Self {
        Self {
            regs: [0; NUM_REGS],
            hardwire_zero,
        }
    }

    /// Reads a register. `$0` reads 0 when hard-wired; out-of-range reads 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 && self.hardwire_zero {
            return 0;
        }
        self.regs.get(idx).copied().unwrap_or(0)
    }

    /// Writes a register. Writes to a hard-wired `$0` or out-of-range indices are dropped.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx == 0 && self.hardwire_zero {
            return;
        }
        match self.regs.get_mut(idx) {
            Some(slot) => *slot = val,
            None => debug!(idx, "register write out of range dropped"),
        }
    }

    /// Whether `$0` is hard-wired to zero.
    pub const fn hardwire_zero(&self) -> bool {
        self.hardwire_zero
    }

    /// Copy of all 32 register values, as reads would observe them.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        std::array::from_fn(|i| self.read(i))
    }
}

/// Two registers per line: `$0  (zero) = 0x00000000  $1  (at) = ...`.
impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGS).step_by(2) {
            writeln!(
                f,
                "${:<2} ({:>4}) = {:#010x}   ${:<2} ({:>4}) = {:#010x}",
                i,
                abi::name(i),
                self.read(i),
                i + 1,
                abi::name(i + 1),
                self.read(i + 1)
            )?;
        }
        Ok(())
    }
}
