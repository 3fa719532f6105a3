//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Hazards:** Data-hazard stall cycles and forwarding-path usage.
//! 3. **Control flow:** Taken branches/jumps and instructions flushed behind them.
//! 4. **Memory:** Load and store counts.

use std::time::Instant;

/// Simulation statistics structure tracking all performance metrics.
///
/// Counters are updated by the pipeline stages as instructions flow through;
/// nothing here influences timing.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions that left Writeback.
    pub instructions_retired: u64,

    /// Stall cycles inserted by Decode for RAW dependencies.
    pub stalls_data: u64,
    /// Wrong-path instructions squashed after a taken branch or jump.
    pub flushed: u64,
    /// Taken branches and jumps.
    pub branches_taken: u64,

    /// Operands taken from the EX/MEM latch.
    pub forwards_ex_mem: u64,
    /// Operands taken from the MEM/WB latch.
    pub forwards_mem_wb: u64,

    /// Loads performed by the Memory stage.
    pub loads: u64,
    /// Stores performed by the Memory stage.
    pub stores: u64,

    /// Unimplemented words retired as no-ops.
    pub unimplemented: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            stalls_data: 0,
            flushed: 0,
            branches_taken: 0,
            forwards_ex_mem: 0,
            forwards_mem_wb: 0,
            loads: 0,
            stores: 0,
            unimplemented: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"hazards"`, `"memory"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "hazards", "memory"];

impl SimStats {
    /// Cycles per retired instruction, or `0.0` before anything has retired.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Total operands supplied by forwarding paths.
    pub const fn forwards(&self) -> u64 {
        self.forwards_ex_mem + self.forwards_mem_wb
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`, `"hazards"`, or
    /// `"memory"`. Pass an empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;

        if want("summary") {
            let ipc = self.instructions_retired as f64 / cyc;
            let khz = (self.cycles as f64 / seconds) / 1000.0;
            println!("\n==========================================================");
            println!("MIPS PIPELINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_freq                 {khz:.2} kHz");
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_ipc                  {ipc:.4}");
            println!("sim_cpi                  {:.4}", self.cpi());
            println!("----------------------------------------------------------");
        }
        if want("hazards") {
            println!("HAZARDS");
            println!(
                "  stalls.data            {} ({:.2}%)",
                self.stalls_data,
                (self.stalls_data as f64 / cyc) * 100.0
            );
            println!("  forward.ex_mem         {}", self.forwards_ex_mem);
            println!("  forward.mem_wb         {}", self.forwards_mem_wb);
            println!("  branch.taken           {}", self.branches_taken);
            println!("  branch.flushed         {}", self.flushed);
            println!("  retire.unimplemented   {}", self.unimplemented);
            println!("----------------------------------------------------------");
        }
        if want("memory") {
            println!("MEMORY");
            println!("  op.load                {}", self.loads);
            println!("  op.store               {}", self.stores);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
