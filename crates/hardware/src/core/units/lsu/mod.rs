//! Load/Store Unit (LSU).
//!
//! Performs the Memory stage's data accesses against the bus. Byte and
//! halfword loads are sign-extended to 32 bits; stores write the low 8, 16,
//! or 32 bits of the data value.

use crate::core::pipeline::signals::MemWidth;
use crate::soc::interconnect::Bus;

/// Load/Store Unit.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Loads `width` bits from `addr`, sign-extending sub-word values.
    pub fn load(bus: &Bus, addr: u32, width: MemWidth) -> u32 {
        match width {
            MemWidth::Byte => bus.read_u8(addr) as i8 as i32 as u32,
            MemWidth::Half => bus.read_u16(addr) as i16 as i32 as u32,
            MemWidth::Word => bus.read_u32(addr),
            MemWidth::Nop => 0,
        }
    }

    /// Stores the low `width` bits of `data` at `addr`.
    pub fn store(bus: &mut Bus, addr: u32, data: u32, width: MemWidth) {
        match width {
            MemWidth::Byte => bus.write_u8(addr, data as u8),
            MemWidth::Half => bus.write_u16(addr, data as u16),
            MemWidth::Word => bus.write_u32(addr, data),
            MemWidth::Nop => {}
        }
    }
}
