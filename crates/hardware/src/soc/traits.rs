//! Device trait for memory-mapped regions.
//!
//! This module defines the `Device` trait implemented by everything attached
//! to the bus. It provides:
//! 1. **Identification:** `name` and `address_range` for bus routing.
//! 2. **Access:** Byte read/write at region-relative offsets, with halfword and
//!    word accessors assembled little-endian from bytes by default.
//! 3. **Lifecycle:** `clear` to re-zero contents on reset.

/// Trait for byte-addressable regions attached to the system bus.
#[cfg_attr(test, mockall::automock)]
pub trait Device {
    /// Returns a short name for this device (e.g., `"TEXT"`, `"DATA"`).
    fn name(&self) -> &'static str;

    /// Returns `(base_address, size_in_bytes)` for this region.
    fn address_range(&self) -> (u32, u32);

    /// Reads one byte at the given region-relative offset.
    fn read_u8(&self, offset: u32) -> u8;

    /// Writes one byte at the given region-relative offset.
    fn write_u8(&mut self, offset: u32, val: u8);

    /// Zeroes the whole region.
    fn clear(&mut self);

    /// Reads two bytes (little-endian) at the given offset.
    fn read_u16(&self, offset: u32) -> u16 {
        u16::from_le_bytes([self.read_u8(offset), self.read_u8(offset.wrapping_add(1))])
    }

    /// Reads four bytes (little-endian) at the given offset.
    fn read_u32(&self, offset: u32) -> u32 {
        u32::from_le_bytes([
            self.read_u8(offset),
            self.read_u8(offset.wrapping_add(1)),
            self.read_u8(offset.wrapping_add(2)),
            self.read_u8(offset.wrapping_add(3)),
        ])
    }

    /// Writes two bytes (little-endian) at the given offset.
    fn write_u16(&mut self, offset: u32, val: u16) {
        for (i, byte) in val.to_le_bytes().into_iter().enumerate() {
            self.write_u8(offset.wrapping_add(i as u32), byte);
        }
    }

    /// Writes four bytes (little-endian) at the given offset.
    fn write_u32(&mut self, offset: u32, val: u32) {
        for (i, byte) in val.to_le_bytes().into_iter().enumerate() {
            self.write_u8(offset.wrapping_add(i as u32), byte);
        }
    }
}
