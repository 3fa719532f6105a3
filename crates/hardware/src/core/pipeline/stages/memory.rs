//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline.
//! Loads read memory into the LMD field of the MEM/WB entry; stores write
//! memory and produce nothing for Writeback to commit. Every other
//! instruction passes its ALU result through unchanged.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::MemWbEntry;
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::units::lsu::Lsu;

/// Executes the memory access stage of the pipeline.
pub fn mem_stage(cpu: &mut Cpu) {
    let Some(ex) = cpu.ex_mem.entry.take() else {
        cpu.mem_wb.flush();
        return;
    };

    let mut lmd = 0;
    if ex.ctrl.mem_read {
        lmd = Lsu::load(&cpu.bus, ex.alu, ex.ctrl.width);
        cpu.stats.loads += 1;
        trace!(
            addr = format_args!("{:#010x}", ex.alu),
            val = format_args!("{lmd:#010x}"),
            "load"
        );
    } else if ex.ctrl.mem_write {
        Lsu::store(&mut cpu.bus, ex.alu, ex.store_data, ex.ctrl.width);
        cpu.stats.stores += 1;
        trace!(
            addr = format_args!("{:#010x}", ex.alu),
            val = format_args!("{:#010x}", ex.store_data),
            "store"
        );
    }

    cpu.mem_wb.entry = Some(MemWbEntry {
        pc: ex.pc,
        word: ex.word,
        inst: ex.inst,
        rd: ex.rd,
        alu: ex.alu,
        lmd,
        ctrl: ex.ctrl,
    });
}
