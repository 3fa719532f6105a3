//! Execute Stage Tests.

use mipsim_core::core::pipeline::latches::{IdEx, MemWb};
use mipsim_core::core::pipeline::stages::execute_stage;

use crate::common::builder::instruction::*;
use crate::common::builder::pipeline_state::{IdExBuilder, MemWbBuilder};
use crate::common::harness::TestContext;

const PC: u32 = 0x0040_0020;

fn execute(builder: IdExBuilder) -> TestContext {
    let mut ctx = TestContext::new();
    ctx.cpu.id_ex = IdEx::holding(builder.build());
    execute_stage(&mut ctx.cpu);
    ctx
}

fn alu_result(ctx: &TestContext) -> u32 {
    ctx.cpu.ex_mem.entry.expect("EX/MEM should be occupied").alu
}

#[test]
fn immediate_replaces_operand_b() {
    let ctx = execute(IdExBuilder::new(PC, addiu(1, 2, -1)).a(10).b(999));
    assert_eq!(alu_result(&ctx), 9);
}

#[test]
fn effective_address_for_loads() {
    let ctx = execute(IdExBuilder::new(PC, lw(1, 8, 2)).a(0x1001_0000));
    assert_eq!(alu_result(&ctx), 0x1001_0008);
}

#[test]
fn store_data_passes_through() {
    let ctx = execute(
        IdExBuilder::new(PC, sw(3, 0, 4))
            .a(0x1001_0000)
            .store_data(15),
    );
    let entry = ctx.cpu.ex_mem.entry.expect("EX/MEM should be occupied");
    assert_eq!(entry.store_data, 15);
    assert_eq!(entry.alu, 0x1001_0000);
}

#[test]
fn lui_shifts_immediate() {
    let ctx = execute(IdExBuilder::new(PC, lui(4, 0x1001)));
    assert_eq!(alu_result(&ctx), 0x1001_0000);
}

#[test]
fn taken_branch_publishes_redirect() {
    let ctx = execute(IdExBuilder::new(PC, beq(1, 2, -2)).a(3).b(3));
    assert_eq!(ctx.cpu.branch_resolved, Some(PC - 8));
    assert_eq!(ctx.cpu.stats.branches_taken, 1);
}

#[test]
fn untaken_branch_publishes_nothing() {
    let ctx = execute(IdExBuilder::new(PC, beq(1, 2, -2)).a(3).b(4));
    assert_eq!(ctx.cpu.branch_resolved, None);
    assert_eq!(ctx.cpu.stats.branches_taken, 0);
}

#[test]
fn jal_links_and_redirects() {
    let ctx = execute(IdExBuilder::new(PC, jal(0x0010_0000)));
    assert_eq!(ctx.cpu.branch_resolved, Some(0x0040_0000));
    assert_eq!(alu_result(&ctx), PC + 4);
    assert_eq!(
        ctx.cpu.ex_mem.entry.map(|e| e.rd),
        Some(Some(31))
    );
}

#[test]
fn jr_redirects_to_operand_a() {
    let ctx = execute(IdExBuilder::new(PC, jr(31)).a(0x0040_0100));
    assert_eq!(ctx.cpu.branch_resolved, Some(0x0040_0100));
}

#[test]
fn mult_stages_hi_lo_in_next_state() {
    let ctx = execute(IdExBuilder::new(PC, mult(1, 2)).a(-3i32 as u32).b(4));
    assert_eq!(ctx.cpu.next.lo, -12i32 as u32);
    assert_eq!(ctx.cpu.next.hi, u32::MAX);
    // Not visible until commit.
    assert_eq!(ctx.cpu.current.lo, 0);
}

#[test]
fn mfhi_reads_committed_hi() {
    let mut ctx = TestContext::new();
    ctx.cpu.current.hi = 0xABCD;
    ctx.cpu.id_ex = IdEx::holding(IdExBuilder::new(PC, mfhi(5)).build());
    execute_stage(&mut ctx.cpu);
    assert_eq!(alu_result(&ctx), 0xABCD);
}

#[test]
fn pending_branch_squashes_id_ex() {
    let mut ctx = TestContext::new();
    ctx.cpu.id_ex = IdEx::holding(IdExBuilder::new(PC, addiu(1, 0, 1)).build());
    ctx.cpu.branch_pending = Some(0x0040_0000);
    execute_stage(&mut ctx.cpu);
    assert!(ctx.cpu.ex_mem.entry.is_none());
    assert!(ctx.cpu.id_ex.entry.is_none());
    assert_eq!(ctx.cpu.stats.flushed, 1);
}

/// Runs Execute with the exit SYSCALL one stage ahead in MEM/WB.
fn execute_behind_exit(builder: IdExBuilder) -> TestContext {
    let mut ctx = TestContext::new();
    ctx.cpu.mem_wb = MemWb::holding(MemWbBuilder::new(PC - 4, syscall()).alu(10).build());
    ctx.cpu.id_ex = IdEx::holding(builder.build());
    execute_stage(&mut ctx.cpu);
    ctx
}

#[test]
fn hi_lo_untouched_behind_exit_syscall() {
    let ctx = execute_behind_exit(IdExBuilder::new(PC, mult(1, 2)).a(5).b(5));
    assert_eq!((ctx.cpu.next.hi, ctx.cpu.next.lo), (0, 0));

    let ctx = execute_behind_exit(IdExBuilder::new(PC, mtlo(1)).a(7));
    assert_eq!(ctx.cpu.next.lo, 0);
}

#[test]
fn no_redirect_behind_exit_syscall() {
    let ctx = execute_behind_exit(IdExBuilder::new(PC, beq(1, 2, -2)).a(3).b(3));
    assert_eq!(ctx.cpu.branch_resolved, None);
    assert_eq!(ctx.cpu.stats.branches_taken, 0);
}

#[test]
fn other_syscall_ahead_keeps_side_effects() {
    let mut ctx = TestContext::new();
    ctx.cpu.mem_wb = MemWb::holding(MemWbBuilder::new(PC - 4, syscall()).alu(1).build());
    ctx.cpu.id_ex = IdEx::holding(IdExBuilder::new(PC, mtlo(1)).a(7).build());
    execute_stage(&mut ctx.cpu);
    assert_eq!(ctx.cpu.next.lo, 7);
}
