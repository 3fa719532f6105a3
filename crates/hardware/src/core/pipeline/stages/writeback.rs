//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It
//! commits the MEM/WB result to the next-state register file and retires the
//! instruction. A retiring SYSCALL with `$v0 == 10` halts the machine, and a
//! retiring unimplemented word is reported as a diagnostic.
//!
//! The retiring entry is kept in `wb_latch` for the rest of the cycle so the
//! Decode read port observes the write.

use tracing::{info, warn};

use crate::common::Diagnostic;
use crate::common::constants::SYSCALL_EXIT;
use crate::core::Cpu;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::Instruction;

/// Executes the writeback stage of the pipeline.
pub fn wb_stage(cpu: &mut Cpu) {
    let Some(wb) = cpu.mem_wb.entry.take() else {
        cpu.wb_latch.flush();
        return;
    };
    cpu.wb_latch.entry = Some(wb);

    if wb.ctrl.syscall && wb.alu == SYSCALL_EXIT {
        info!(
            pc = format_args!("{:#010x}", wb.pc),
            cycle = cpu.stats.cycles + 1,
            "exit syscall retired, halting"
        );
        cpu.halted = true;
    } else if wb.ctrl.reg_write {
        if let Some(rd) = wb.rd {
            cpu.next.regs.write(rd, wb.result());
        }
    }

    if let Instruction::Unimplemented(word) = wb.inst {
        warn!(
            pc = format_args!("{:#010x}", wb.pc),
            word = format_args!("{word:#010x}"),
            "unimplemented instruction retired as no-op"
        );
        cpu.stats.unimplemented += 1;
        cpu.diagnostics.push(Diagnostic::Unimplemented { pc: wb.pc, word });
    }

    cpu.stats.instructions_retired += 1;
}
