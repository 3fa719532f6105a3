//! System construction and the top-level `System` type.
//!
//! Builds the bus and attaches the four memory regions sized from
//! configuration.

use crate::config::MemoryConfig;
use crate::soc::interconnect::Bus;
use crate::soc::memory::{MemoryRegion, Region};

/// Top-level system instance: the bus with its attached regions.
#[derive(Debug)]
pub struct System {
    /// System interconnect; routes accesses to the memory regions.
    pub bus: Bus,
}

impl System {
    /// Builds the text, data, kernel text, and kernel data regions.
    pub fn new(config: &MemoryConfig) -> Self {
        let mut bus = Bus::new();
        for region in Region::ALL {
            bus.add_device(Box::new(MemoryRegion::for_region(region, config)));
        }
        Self { bus }
    }
}
