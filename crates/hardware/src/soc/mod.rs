//! System-on-Chip (SoC) Components.
//!
//! The memory side of the simulated machine: the bus, the region devices
//! attached to it, and the builder that assembles them.

/// System builder for assembling the memory image.
pub mod builder;

/// System bus interconnect and routing.
pub mod interconnect;

/// Memory region implementations.
pub mod memory;

/// Device trait definitions.
pub mod traits;

pub use builder::System;
pub use interconnect::Bus;
