//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline. It
//! performs the following:
//! 1. **Decoding:** Turns the IF/ID word into a typed instruction and its
//!    control signals, once.
//! 2. **Hazard Control:** Consults the hazard/forwarding controller and either
//!    stalls (bubble downstream, IF/ID frozen) or resolves both operands.
//! 3. **Register Read:** Reads source registers through the write-before-read
//!    port, or takes forwarded values from EX/MEM and MEM/WB.
//! 4. **Flush:** Discards the IF/ID instruction when a taken branch is pending.
//!
//! An instruction decoded in the same cycle a redirect resolves is on the wrong
//! path and is squashed next cycle. It passes through without stalling or
//! forwarding, so it leaves no mark on the hazard statistics.

use tracing::debug;

use crate::core::Cpu;
use crate::core::pipeline::hazards::{self, HazardDecision, OperandHazards};
use crate::core::pipeline::latches::IdExEntry;
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::decode;

/// Executes the instruction decode stage of the pipeline.
///
/// # Behavior
///
/// - Branch redirect pending: the IF/ID instruction is on the wrong path and is
///   squashed; a bubble goes downstream.
/// - Stall counter nonzero: a bubble goes downstream; IF/ID is left intact for
///   the re-decode.
/// - Redirect resolved this cycle: the entry is passed on unchecked.
/// - Hazard requiring a stall: sets the stall counter and sends a bubble.
/// - Otherwise: produces a fully resolved ID/EX entry.
pub fn decode_stage(cpu: &mut Cpu) {
    if cpu.branch_pending.is_some() {
        if cpu.if_id.squash() {
            cpu.stats.flushed += 1;
        }
        cpu.id_ex.flush();
        return;
    }

    if cpu.stall_cycles > 0 {
        cpu.id_ex.flush();
        return;
    }

    let Some(fetched) = cpu.if_id.entry else {
        cpu.id_ex.flush();
        return;
    };

    let inst = decode(fetched.word);
    let hazards = if cpu.branch_resolved.is_some() {
        OperandHazards::default()
    } else {
        hazards::detect(
            &inst,
            &cpu.ex_mem,
            &cpu.mem_wb,
            cpu.forwarding,
            cpu.hardwire_zero(),
        )
    };

    let stall = hazards.stall_cycles();
    if stall > 0 {
        debug!(
            pc = format_args!("{:#010x}", fetched.pc),
            %inst,
            stall,
            "data hazard, stalling decode"
        );
        cpu.stall_cycles = stall;
        cpu.stats.stalls_data += u64::from(stall);
        cpu.id_ex.flush();
        return;
    }

    let (rs, rt) = inst.sources();
    let a = read_operand(cpu, rs, hazards.a);
    let b = read_operand(cpu, rt, hazards.b);
    let ctrl = ControlSignals::for_instruction(&inst);

    let (b, store_data) = if ctrl.mem_write { (0, b) } else { (b, 0) };

    cpu.id_ex.entry = Some(IdExEntry {
        pc: fetched.pc,
        word: fetched.word,
        inst,
        rs,
        rt,
        rd: inst.dest(),
        a,
        b,
        imm: inst.immediate(),
        shamt: inst.shamt(),
        target: inst.target(),
        store_data,
        ctrl,
    });
}

/// Resolves one operand per its hazard decision.
fn read_operand(cpu: &mut Cpu, src: Option<usize>, decision: HazardDecision) -> u32 {
    let Some(reg) = src else {
        return 0;
    };
    if let Some(val) = hazards::forwarded_value(decision, &cpu.ex_mem, &cpu.mem_wb) {
        match decision {
            HazardDecision::ForwardExMem => cpu.stats.forwards_ex_mem += 1,
            _ => cpu.stats.forwards_mem_wb += 1,
        }
        debug!(reg, ?decision, val = format_args!("{val:#010x}"), "operand forwarded");
        return val;
    }
    cpu.read_register(reg)
}
