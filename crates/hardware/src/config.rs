//! Configuration system for the MIPS pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline region sizes and pipeline behaviour.
//! 2. **Structures:** `GeneralConfig` for pipeline/tracing options and `MemoryConfig`
//!    for the four-region memory image.
//! 3. **Loading:** JSON deserialization with per-field defaults, so a partial
//!    document only overrides what it names.
//!
//! Use `Config::default()` for programmatic construction or `Config::from_file`
//! for the CLI's `--config` option.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::SimResult;

/// Default configuration constants for the simulator.
mod defaults {
    /// User text region size (1 MiB, 262144 instruction words).
    pub const TEXT_SIZE: u32 = 1024 * 1024;

    /// User data region size (1 MiB).
    pub const DATA_SIZE: u32 = 1024 * 1024;

    /// Kernel text region size (64 KiB).
    pub const KTEXT_SIZE: u32 = 64 * 1024;

    /// Kernel data region size (64 KiB).
    pub const KDATA_SIZE: u32 = 64 * 1024;

    /// Cycle bound the CLI applies when running to completion.
    pub const MAX_CYCLES: u64 = 1_000_000;
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Pipeline behaviour and tracing.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Memory image layout.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a JSON configuration document.
    ///
    /// Missing sections and fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` if the document is not valid JSON or has
    /// fields of the wrong type.
    pub fn from_json_str(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Io` if the file cannot be read and `SimError::Config`
    /// if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace`-level event per cycle with the contents of every latch.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial state of the forwarding toggle.
    #[serde(default)]
    pub forwarding: bool,

    /// Treat register 0 as the constant zero (writes discarded, never a hazard source).
    #[serde(default = "GeneralConfig::default_hardwire_zero")]
    pub hardwire_zero: bool,

    /// Cycle bound for bounded run-to-completion.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    /// Register 0 is hard-wired unless explicitly disabled.
    fn default_hardwire_zero() -> bool {
        true
    }

    /// Returns the default cycle bound.
    fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            forwarding: false,
            hardwire_zero: true,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Sizes of the four memory regions, in bytes.
///
/// Bases are fixed by the memory map; a size larger than the architectural
/// span of its region is clamped when the region is built.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// User text region size.
    #[serde(default = "MemoryConfig::default_text_size")]
    pub text_size: u32,

    /// User data region size.
    #[serde(default = "MemoryConfig::default_data_size")]
    pub data_size: u32,

    /// Kernel text region size.
    #[serde(default = "MemoryConfig::default_ktext_size")]
    pub ktext_size: u32,

    /// Kernel data region size.
    #[serde(default = "MemoryConfig::default_kdata_size")]
    pub kdata_size: u32,
}

impl MemoryConfig {
    fn default_text_size() -> u32 {
        defaults::TEXT_SIZE
    }

    fn default_data_size() -> u32 {
        defaults::DATA_SIZE
    }

    fn default_ktext_size() -> u32 {
        defaults::KTEXT_SIZE
    }

    fn default_kdata_size() -> u32 {
        defaults::KDATA_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            text_size: defaults::TEXT_SIZE,
            data_size: defaults::DATA_SIZE,
            ktext_size: defaults::KTEXT_SIZE,
            kdata_size: defaults::KDATA_SIZE,
        }
    }
}
