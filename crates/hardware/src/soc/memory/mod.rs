//! Memory image regions.
//!
//! This module implements the four fixed regions of the memory image. It provides:
//! 1. **Layout:** `Region`, the user/kernel text and data segments with their
//!    architectural base and limit addresses.
//! 2. **Storage:** `MemoryRegion`, a zero-initialised byte array mapped at a
//!    region base and attached to the bus as a `Device`.

/// Byte-array backed region device.
pub mod region;

pub use region::{MemoryRegion, Region};
