//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It reads the word at the PC into the IF/ID latch and computes the next PC.
//! A pending branch redirect from Execute takes priority over everything
//! else; a nonzero stall counter freezes the PC and the IF/ID latch.

use tracing::debug;

use crate::common::constants::WORD_BYTES;
use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;

/// Executes the instruction fetch stage of the pipeline.
///
/// # Behavior
///
/// - Redirect pending: fetch at the target, clear the redirect and any stall.
/// - Stall counter nonzero: fetch nothing, keep the PC, decrement the counter.
/// - Otherwise: fetch at the PC and advance it by 4.
pub fn fetch_stage(cpu: &mut Cpu) {
    if let Some(target) = cpu.branch_pending.take() {
        debug!(
            target = format_args!("{target:#010x}"),
            "fetch redirected"
        );
        cpu.stall_cycles = 0;
        fetch_at(cpu, target);
        return;
    }

    if cpu.stall_cycles > 0 {
        cpu.stall_cycles -= 1;
        cpu.next.pc = cpu.current.pc;
        return;
    }

    fetch_at(cpu, cpu.current.pc);
}

fn fetch_at(cpu: &mut Cpu, pc: u32) {
    let word = cpu.bus.read_u32(pc);
    cpu.if_id.entry = Some(IfIdEntry { pc, word });
    cpu.next.pc = pc.wrapping_add(WORD_BYTES);
}
