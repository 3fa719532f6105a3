//! Control Hazard Tests.
//!
//! Verifies the flush-on-taken policy: branches and jumps resolve in Execute,
//! the two younger instructions are squashed, and fetch resumes at the target.

use mipsim_core::common::constants::MEM_TEXT_BEGIN;
use rstest::rstest;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

/// 26-bit J-format target field for the `n`th program instruction.
fn target_of(n: u32) -> u32 {
    TestContext::pc_of(n) >> 2
}

#[test]
fn taken_branch_skips_fall_through() {
    let mut ctx = TestContext::new().forwarding(true).load_program(&[
        beq(0, 0, 2),
        addiu(1, 0, 1),
        addiu(1, 0, 2),
        addiu(2, 0, 10),
        syscall(),
    ]);
    ctx.run_to_halt(100);

    assert_eq!(ctx.get_reg(1), 2);
    assert_eq!(ctx.cpu.stats.branches_taken, 1);
    assert_eq!(ctx.cpu.stats.flushed, 2);
    assert_eq!(ctx.cpu.stats.instructions_retired, 4);
    // Target fetched one cycle later than the sequential successor would be.
    assert_eq!(ctx.cpu.stats.cycles, 10);
}

#[test]
fn not_taken_branch_costs_nothing() {
    let mut ctx = TestContext::new().forwarding(true).load_program(&[
        bne(0, 0, 2),
        addiu(1, 0, 1),
        addiu(1, 1, 2),
        addiu(2, 0, 10),
        syscall(),
    ]);
    ctx.run_to_halt(100);

    assert_eq!(ctx.get_reg(1), 3);
    assert_eq!(ctx.cpu.stats.branches_taken, 0);
    assert_eq!(ctx.cpu.stats.flushed, 0);
    assert_eq!(ctx.cpu.stats.cycles, 9);
}

#[test]
fn flush_squashes_exactly_two_instructions() {
    let mut ctx = TestContext::new().load_program(&[beq(0, 0, 3)]);
    // Cycle 3: BEQ resolves in Execute with two younger instructions behind it.
    ctx.run(3);
    assert!(ctx.cpu.id_ex.entry.is_some());
    assert!(ctx.cpu.if_id.entry.is_some());
    assert_eq!(ctx.cpu.branch_pending, Some(TestContext::pc_of(3)));

    ctx.run(1);
    assert!(ctx.cpu.ex_mem.entry.is_none(), "squashed ID/EX leaves a bubble");
    assert!(ctx.cpu.id_ex.entry.is_none(), "squashed IF/ID leaves a bubble");
    let fetched = ctx.cpu.if_id.entry.map(|e| e.pc);
    assert_eq!(fetched, Some(TestContext::pc_of(3)));
    assert_eq!(ctx.cpu.current.pc, TestContext::pc_of(4));
    assert_eq!(ctx.cpu.stats.flushed, 2);
}

#[test]
fn backward_branch_loop() {
    let mut ctx = TestContext::new().load_program(&[
        addiu(1, 0, 3),
        addiu(1, 1, -1),
        bne(1, 0, -1),
        addiu(2, 0, 10),
        syscall(),
    ]);
    ctx.run_to_halt(200);

    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.cpu.stats.branches_taken, 2);
    assert_eq!(ctx.cpu.stats.flushed, 4);
}

#[test]
fn jal_and_jr_link_and_return() {
    let mut ctx = TestContext::new().forwarding(true).load_program(&[
        jal(target_of(4)),
        addiu(2, 0, 10),
        syscall(),
        addiu(5, 0, 99),
        addiu(3, 0, 7),
        jr(31),
        addiu(6, 0, 1),
        addiu(6, 0, 2),
    ]);
    ctx.run_to_halt(100);

    assert_eq!(ctx.get_reg(3), 7);
    assert_eq!(ctx.get_reg(31), MEM_TEXT_BEGIN + 4);
    assert_eq!(ctx.get_reg(5), 0);
    assert_eq!(ctx.get_reg(6), 0);
    assert_eq!(ctx.cpu.stats.branches_taken, 2);
    assert_eq!(ctx.cpu.stats.flushed, 4);
}

#[test]
fn jalr_links_into_named_register() {
    let mut ctx = TestContext::new().load_program(&[
        jalr(7, 8),
        addiu(1, 0, 1),
        addiu(1, 0, 2),
        addiu(2, 0, 10),
        syscall(),
    ]);
    ctx.set_reg(8, TestContext::pc_of(3));
    ctx.run_to_halt(100);

    assert_eq!(ctx.get_reg(7), TestContext::pc_of(1));
    assert_eq!(ctx.get_reg(1), 0);
}

#[rstest]
#[case::bltz_negative(bltz(1, 2), -1i32 as u32, true)]
#[case::bltz_zero(bltz(1, 2), 0, false)]
#[case::bgez_zero(bgez(1, 2), 0, true)]
#[case::bgez_negative(bgez(1, 2), 0x8000_0000, false)]
fn sign_tests_branch_on_signed_value(#[case] branch: u32, #[case] r1: u32, #[case] taken: bool) {
    let mut ctx = TestContext::new().load_program(&[
        branch,
        addiu(3, 0, 1),
        addiu(2, 0, 10),
        syscall(),
    ]);
    ctx.set_reg(1, r1);
    ctx.run_to_halt(100);

    assert_eq!(ctx.get_reg(3), u32::from(!taken));
    assert_eq!(ctx.cpu.stats.branches_taken, u64::from(taken));
}

#[test]
fn jump_keeps_upper_pc_bits() {
    let mut ctx = TestContext::new().load_program(&[
        j(target_of(3)),
        addiu(1, 0, 1),
        addiu(1, 0, 2),
        addiu(2, 0, 10),
        syscall(),
    ]);
    ctx.run_to_halt(100);
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.cpu.stats.flushed, 2);
}
