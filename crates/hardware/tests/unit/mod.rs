//! # Unit Components
//!
//! This module serves as the central hub for the component tests. It organizes
//! tests for the processor core, ISA definitions, SoC memory, the simulation
//! driver, configuration, and statistics.
