//! Instruction Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline. It
//! performs the following:
//! 1. **ALU Execution:** Computes the result, or the effective address for
//!    loads and stores.
//! 2. **HI/LO:** Reads HI/LO for MFHI/MFLO and stages multiply/divide results.
//! 3. **Control Flow:** Resolves branches and jumps. A taken redirect is
//!    published for the next cycle, when Fetch consumes it and the two
//!    younger instructions are squashed.
//! 4. **Link:** JAL/JALR produce the return address `pc + 4`.
//!
//! An instruction executing while the exit SYSCALL sits in MEM/WB never
//! retires, so its HI/LO writes and redirect are dropped.

use tracing::debug;

use crate::common::constants::WORD_BYTES;
use crate::core::Cpu;
use crate::core::pipeline::latches::ExMemEntry;
use crate::core::pipeline::signals::HiLoRead;
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::units::alu::{Alu, muldiv};
use crate::core::units::bru::BranchUnit;

/// Executes the instruction execute stage of the pipeline.
///
/// # Behavior
///
/// - Branch redirect pending: the ID/EX instruction is on the wrong path and is
///   squashed; a bubble goes downstream.
/// - Bubble in ID/EX: a bubble goes downstream.
/// - Exit SYSCALL in MEM/WB: the result still goes downstream, but HI/LO and
///   the redirect are left untouched.
/// - Otherwise: computes the result and resolves control flow.
pub fn execute_stage(cpu: &mut Cpu) {
    if cpu.branch_pending.is_some() {
        if cpu.id_ex.squash() {
            cpu.stats.flushed += 1;
        }
        cpu.ex_mem.flush();
        return;
    }

    let Some(id) = cpu.id_ex.entry.take() else {
        cpu.ex_mem.flush();
        return;
    };
    let ctrl = id.ctrl;

    let b = if ctrl.b_imm { id.imm } else { id.b };
    let mut alu = match ctrl.hilo_read {
        Some(HiLoRead::Hi) => cpu.current.hi,
        Some(HiLoRead::Lo) => cpu.current.lo,
        None => Alu::execute(ctrl.alu, id.a, b, id.shamt),
    };

    let shadowed = cpu.exit_pending();
    if shadowed {
        debug!(
            pc = format_args!("{:#010x}", id.pc),
            inst = %id.inst,
            "behind exit syscall, side effects dropped"
        );
    }

    if let Some(op) = ctrl.muldiv.filter(|_| !shadowed) {
        let update = muldiv::execute(op, id.a, b);
        if let Some(hi) = update.hi {
            cpu.next.hi = hi;
        }
        if let Some(lo) = update.lo {
            cpu.next.lo = lo;
        }
    }

    let redirect = if let Some(cond) = ctrl.branch {
        BranchUnit::taken(cond, id.a, id.b).then(|| BranchUnit::branch_target(id.pc, id.imm))
    } else {
        ctrl.jump
            .map(|kind| BranchUnit::jump_target(kind, id.pc, id.target, id.a))
    };

    if let Some(target) = redirect.filter(|_| !shadowed) {
        debug!(
            pc = format_args!("{:#010x}", id.pc),
            inst = %id.inst,
            target = format_args!("{target:#010x}"),
            "control transfer taken"
        );
        cpu.stats.branches_taken += 1;
        cpu.branch_resolved = Some(target);
    }

    if ctrl.link {
        alu = id.pc.wrapping_add(WORD_BYTES);
    }

    cpu.ex_mem.entry = Some(ExMemEntry {
        pc: id.pc,
        word: id.word,
        inst: id.inst,
        rd: id.rd,
        alu,
        store_data: id.store_data,
        ctrl,
    });
}
