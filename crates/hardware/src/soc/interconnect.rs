//! System Interconnect (Bus).
//!
//! This module implements the bus that routes absolute addresses to the
//! attached regions. It provides:
//! 1. **Routing:** Finds the region whose range contains an address and
//!    converts it to a region-relative offset.
//! 2. **Access:** Byte, halfword, and word reads/writes. Unmapped reads return
//!    0; unmapped writes are discarded.
//! 3. **Image management:** Loading instruction words, clearing, and dumping.

use std::fmt;

use tracing::debug;

use crate::common::constants::WORD_BYTES;
use crate::soc::traits::Device;

/// System bus connecting the pipeline to memory regions.
pub struct Bus {
    devices: Vec<Box<dyn Device>>,
    last_device_idx: usize,
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.devices.iter().map(|d| {
                let (base, size) = d.address_range();
                format!("{}@{base:#010x}+{size:#x}", d.name())
            }))
            .finish()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            last_device_idx: 0,
        }
    }

    /// Attaches a device to the bus.
    pub fn add_device(&mut self, dev: Box<dyn Device>) {
        self.devices.push(dev);
    }

    /// Names and ranges of all attached devices, in attachment order.
    pub fn regions(&self) -> Vec<(String, u32, u32)> {
        self.devices
            .iter()
            .map(|d| {
                let (base, size) = d.address_range();
                (d.name().to_string(), base, size)
            })
            .collect()
    }

    fn locate(&self, addr: u32) -> Option<(usize, u32)> {
        let hit = |d: &dyn Device| {
            let (base, size) = d.address_range();
            (addr >= base && addr - base < size).then(|| addr - base)
        };
        if let Some(offset) = self.devices.get(self.last_device_idx).and_then(|d| hit(d.as_ref())) {
            return Some((self.last_device_idx, offset));
        }
        self.devices
            .iter()
            .enumerate()
            .find_map(|(i, d)| hit(d.as_ref()).map(|offset| (i, offset)))
    }

    fn find_device(&self, addr: u32) -> Option<(&dyn Device, u32)> {
        self.locate(addr)
            .map(|(i, offset)| (self.devices[i].as_ref(), offset))
    }

    fn find_device_mut(&mut self, addr: u32) -> Option<(&mut Box<dyn Device>, u32)> {
        let (i, offset) = self.locate(addr)?;
        self.last_device_idx = i;
        Some((&mut self.devices[i], offset))
    }

    /// Returns `true` if some region claims `addr`.
    pub fn is_mapped(&self, addr: u32) -> bool {
        self.locate(addr).is_some()
    }

    /// Reads one byte; 0 if unmapped.
    pub fn read_u8(&self, addr: u32) -> u8 {
        self.find_device(addr).map_or(0, |(d, off)| d.read_u8(off))
    }

    /// Reads a little-endian halfword; 0 if unmapped.
    pub fn read_u16(&self, addr: u32) -> u16 {
        self.find_device(addr).map_or(0, |(d, off)| d.read_u16(off))
    }

    /// Reads a little-endian word; 0 if unmapped.
    pub fn read_u32(&self, addr: u32) -> u32 {
        self.find_device(addr).map_or(0, |(d, off)| d.read_u32(off))
    }

    /// Writes one byte; discarded if unmapped.
    pub fn write_u8(&mut self, addr: u32, val: u8) {
        match self.find_device_mut(addr) {
            Some((dev, offset)) => dev.write_u8(offset, val),
            None => debug!(addr = format_args!("{addr:#010x}"), "write to unmapped address discarded"),
        }
    }

    /// Writes a little-endian halfword; discarded if unmapped.
    pub fn write_u16(&mut self, addr: u32, val: u16) {
        match self.find_device_mut(addr) {
            Some((dev, offset)) => dev.write_u16(offset, val),
            None => debug!(addr = format_args!("{addr:#010x}"), "write to unmapped address discarded"),
        }
    }

    /// Writes a little-endian word; discarded if unmapped.
    pub fn write_u32(&mut self, addr: u32, val: u32) {
        match self.find_device_mut(addr) {
            Some((dev, offset)) => dev.write_u32(offset, val),
            None => debug!(addr = format_args!("{addr:#010x}"), "write to unmapped address discarded"),
        }
    }

    /// Writes consecutive words starting at `addr`.
    pub fn load_words(&mut self, addr: u32, words: &[u32]) {
        for (i, word) in words.iter().enumerate() {
            self.write_u32(addr.wrapping_add(i as u32 * WORD_BYTES), *word);
        }
    }

    /// Zeroes every region.
    pub fn clear(&mut self) {
        for dev in &mut self.devices {
            dev.clear();
        }
    }

    /// Reads the words in `[start, end]`, stepping by 4 from `start`.
    pub fn dump(&self, start: u32, end: u32) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        let mut addr = start;
        while addr <= end {
            out.push((addr, self.read_u32(addr)));
            match addr.checked_add(WORD_BYTES) {
                Some(next) => addr = next,
                None => break,
            }
        }
        out
    }
}
