//! Data Forwarding Tests.
//!
//! Verifies that forwarding selects the right latch, supplies the right value
//! (ALU result vs. loaded value), and produces the same architectural result
//! as the stalling pipeline.

use mipsim_core::core::pipeline::hazards::{HazardDecision, classify_operand, forwarded_value};
use mipsim_core::core::pipeline::latches::{ExMem, MemWb};
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::*;
use crate::common::builder::pipeline_state::{ExMemBuilder, MemWbBuilder};
use crate::common::harness::TestContext;

const PC: u32 = 0x0040_0000;

#[test]
fn alu_producer_in_ex_mem_forwards() {
    let ex_mem = ExMem {
        entry: Some(ExMemBuilder::new(PC, addiu(5, 0, 9)).alu(9).build()),
    };
    let decision = classify_operand(Some(5), &ex_mem, &MemWb::default(), true, true);
    assert_eq!(decision, HazardDecision::ForwardExMem);
    assert_eq!(forwarded_value(decision, &ex_mem, &MemWb::default()), Some(9));
}

#[test]
fn mem_wb_forwards_loaded_value_for_loads() {
    let mem_wb = MemWb {
        entry: Some(
            MemWbBuilder::new(PC, lw(5, 0, 4))
                .alu(0x1001_0000)
                .lmd(77)
                .build(),
        ),
    };
    let decision = classify_operand(Some(5), &ExMem::default(), &mem_wb, true, true);
    assert_eq!(decision, HazardDecision::ForwardMemWb);
    assert_eq!(forwarded_value(decision, &ExMem::default(), &mem_wb), Some(77));
}

#[test]
fn mem_wb_forwards_alu_result_for_non_loads() {
    let mem_wb = MemWb {
        entry: Some(MemWbBuilder::new(PC, addiu(5, 0, 3)).alu(3).build()),
    };
    assert_eq!(
        forwarded_value(HazardDecision::ForwardMemWb, &ExMem::default(), &mem_wb),
        Some(3)
    );
}

#[test]
fn non_forwarding_decisions_supply_nothing() {
    let ex_mem = ExMem {
        entry: Some(ExMemBuilder::new(PC, addiu(5, 0, 9)).alu(9).build()),
    };
    assert_eq!(forwarded_value(HazardDecision::None, &ex_mem, &MemWb::default()), None);
    assert_eq!(
        forwarded_value(HazardDecision::Stall(2), &ex_mem, &MemWb::default()),
        None
    );
    assert!(!HazardDecision::Stall(1).is_forward());
    assert!(HazardDecision::ForwardExMem.is_forward());
}

#[test]
fn both_forward_paths_counted() {
    // $1 comes from EX/MEM (adjacent), $2 from MEM/WB (two ahead).
    let mut ctx = TestContext::new().forwarding(true).load_program(&[
        addiu(2, 0, 4),
        addiu(1, 0, 3),
        addu(3, 1, 2),
        addiu(2, 0, 10),
        NOP,
        NOP,
        syscall(),
    ]);
    ctx.run_to_halt(100);

    assert_eq!(ctx.get_reg(3), 7);
    assert_eq!(ctx.cpu.stats.forwards_ex_mem, 1);
    assert_eq!(ctx.cpu.stats.forwards_mem_wb, 1);
    assert_eq!(ctx.cpu.stats.stalls_data, 0);
}

#[test]
fn forwarding_changes_timing_not_results() {
    let program = [
        addiu(1, 0, 5),
        addiu(2, 1, 10),
        add(3, 1, 2),
        sub(4, 3, 1),
        lui(8, 0x1001),
        sw(4, 0, 8),
        lw(9, 0, 8),
        addu(10, 9, 9),
        slt(11, 1, 10),
        addiu(2, 0, 10),
        syscall(),
    ];

    let mut stalled = TestContext::new().forwarding(false).load_program(&program);
    stalled.run_to_halt(200);
    let mut forwarded = TestContext::new().forwarding(true).load_program(&program);
    forwarded.run_to_halt(200);

    assert_eq!(stalled.cpu.current.regs, forwarded.cpu.current.regs);
    assert_eq!(
        stalled.cpu.bus.read_u32(0x1001_0000),
        forwarded.cpu.bus.read_u32(0x1001_0000)
    );
    assert_eq!(forwarded.get_reg(10), 30);
    assert_eq!(forwarded.get_reg(11), 1);
    assert!(forwarded.cpu.stats.cycles < stalled.cpu.stats.cycles);
    assert_eq!(
        stalled.cpu.stats.instructions_retired,
        forwarded.cpu.stats.instructions_retired
    );
}

#[test]
fn toggling_forwarding_mid_run_is_safe() {
    let program = [
        addiu(1, 0, 1),
        addiu(1, 1, 1),
        addiu(1, 1, 1),
        addiu(1, 1, 1),
        addiu(1, 1, 1),
        addiu(2, 0, 10),
        syscall(),
    ];
    let mut ctx = TestContext::new().forwarding(true).load_program(&program);
    ctx.run(4);
    ctx.cpu.forwarding = false;
    ctx.run_to_halt(100);
    assert_eq!(ctx.get_reg(1), 5);
}
