//! Byte-array memory regions.

use crate::common::constants::{
    MEM_DATA_BEGIN, MEM_DATA_END, MEM_KDATA_BEGIN, MEM_KDATA_END, MEM_KTEXT_BEGIN, MEM_KTEXT_END,
    MEM_TEXT_BEGIN, MEM_TEXT_END,
};
use crate::config::MemoryConfig;
use crate::soc::traits::Device;

/// The four segments of the memory map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// User program text.
    Text,
    /// User data.
    Data,
    /// Kernel text.
    KernelText,
    /// Kernel data.
    KernelData,
}

impl Region {
    /// All regions in address order.
    pub const ALL: [Self; 4] = [Self::Text, Self::Data, Self::KernelText, Self::KernelData];

    /// First address of the region.
    pub const fn base(self) -> u32 {
        match self {
            Self::Text => MEM_TEXT_BEGIN,
            Self::Data => MEM_DATA_BEGIN,
            Self::KernelText => MEM_KTEXT_BEGIN,
            Self::KernelData => MEM_KDATA_BEGIN,
        }
    }

    /// Last address the region may ever cover.
    pub const fn limit(self) -> u32 {
        match self {
            Self::Text => MEM_TEXT_END,
            Self::Data => MEM_DATA_END,
            Self::KernelText => MEM_KTEXT_END,
            Self::KernelData => MEM_KDATA_END,
        }
    }

    /// Short name used on the bus and in dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Data => "DATA",
            Self::KernelText => "KTEXT",
            Self::KernelData => "KDATA",
        }
    }

    /// Configured size, clamped to the architectural span.
    pub fn size(self, config: &MemoryConfig) -> u32 {
        let wanted = match self {
            Self::Text => config.text_size,
            Self::Data => config.data_size,
            Self::KernelText => config.ktext_size,
            Self::KernelData => config.kdata_size,
        };
        wanted.min(self.limit() - self.base() + 1)
    }
}

/// A contiguous, zero-initialised byte array mapped at a fixed base.
#[derive(Clone, Debug)]
pub struct MemoryRegion {
    name: &'static str,
    base: u32,
    data: Vec<u8>,
}

impl MemoryRegion {
    /// Creates a zeroed region of `size` bytes at `base`.
    pub fn new(name: &'static str, base: u32, size: u32) -> Self {
        Self {
            name,
            base,
            data: vec![0; size as usize],
        }
    }

    /// Creates the region for `region` sized per `config`.
    pub fn for_region(region: Region, config: &MemoryConfig) -> Self {
        Self::new(region.name(), region.base(), region.size(config))
    }
}

impl Device for MemoryRegion {
    fn name(&self) -> &'static str {
        self.name
    }

    fn address_range(&self) -> (u32, u32) {
        (self.base, self.data.len() as u32)
    }

    fn read_u8(&self, offset: u32) -> u8 {
        self.data.get(offset as usize).copied().unwrap_or(0)
    }

    fn write_u8(&mut self, offset: u32, val: u8) {
        if let Some(byte) = self.data.get_mut(offset as usize) {
            *byte = val;
        }
    }

    fn clear(&mut self) {
        self.data.fill(0);
    }
}
