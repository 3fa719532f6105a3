//! Main Execution Loop.
//!
//! This module implements one clock cycle of the CPU. It performs the following:
//! 1. **Stage ordering:** Runs Writeback, Memory, Execute, Decode, Fetch in
//!    that order, so every stage consumes the latch its predecessor produced in
//!    the previous cycle.
//! 2. **Halt handling:** When Writeback retires the exit SYSCALL, the younger
//!    stages do not run; nothing behind the SYSCALL takes effect.
//! 3. **Commit:** Copies `next` into `current` once all stages have run.
//! 4. **Observability:** Optional per-cycle latch trace.

use tracing::trace;

use super::Cpu;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};

impl Cpu {
    /// Advances the pipeline by one clock cycle.
    pub fn tick(&mut self) {
        wb_stage(self);
        if !self.halted {
            mem_stage(self);
            execute_stage(self);
            decode_stage(self);
            fetch_stage(self);
        }
        self.commit();

        if self.trace {
            self.trace_latches();
        }
    }

    fn trace_latches(&self) {
        let show = |e: Option<(u32, String)>| {
            e.map_or_else(|| "-".to_string(), |(pc, text)| format!("{pc:#010x} {text}"))
        };
        trace!(
            cycle = self.stats.cycles,
            pc = format_args!("{:#010x}", self.current.pc),
            if_id = %show(self.if_id.entry.map(|e| (e.pc, crate::isa::decode(e.word).to_string()))),
            id_ex = %show(self.id_ex.entry.map(|e| (e.pc, e.inst.to_string()))),
            ex_mem = %show(self.ex_mem.entry.map(|e| (e.pc, e.inst.to_string()))),
            mem_wb = %show(self.mem_wb.entry.map(|e| (e.pc, e.inst.to_string()))),
            stall = self.stall_cycles,
            "cycle"
        );
    }
}
