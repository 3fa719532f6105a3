//! Whole-Program Scenarios.
//!
//! End-to-end programs run through the `Simulator` clock driver.

use mipsim_core::common::constants::MEM_DATA_BEGIN;
use mipsim_core::config::Config;
use mipsim_core::sim::Simulator;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::*;
use crate::common::harness::init_tracing;

fn run(program: &[u32], forwarding: bool) -> Simulator {
    init_tracing();
    let mut sim = Simulator::new(Config::default());
    sim.set_forwarding(forwarding);
    sim.load_program(program).expect("program fits");
    let summary = sim.run_to_completion().expect("run");
    assert!(summary.halted, "program did not halt");
    sim
}

fn store_sum_program() -> Vec<u32> {
    vec![
        addiu(1, 0, 5),
        addiu(2, 0, 10),
        add(3, 1, 2),
        lui(4, 0x1001),
        sw(3, 0, 4),
        addiu(2, 0, 10),
        syscall(),
    ]
}

#[test]
fn store_sum_to_data_base() {
    for forwarding in [false, true] {
        let sim = run(&store_sum_program(), forwarding);
        assert!(sim.is_halted());
        assert_eq!(sim.memory().read_u32(MEM_DATA_BEGIN), 15);
        assert_eq!(sim.state().regs.read(3), 15);
    }
}

#[test]
fn store_through_zero_base_is_discarded() {
    let sim = run(
        &[
            addiu(1, 0, 5),
            addiu(2, 0, 10),
            add(3, 1, 2),
            sw(3, 0, 0),
            syscall(),
        ],
        false,
    );
    assert_eq!(sim.memory().read_u32(0), 0);
    assert_eq!(sim.memory().read_u32(MEM_DATA_BEGIN), 0);
    assert_eq!(sim.stats().stores, 1);
}

#[test]
fn taken_branch_skips_one_instruction() {
    for forwarding in [false, true] {
        let sim = run(
            &[
                beq(0, 0, 2),
                addiu(1, 0, 1),
                addiu(1, 0, 2),
                addiu(2, 0, 10),
                syscall(),
            ],
            forwarding,
        );
        assert_eq!(sim.state().regs.read(1), 2);
    }
}

#[test]
fn forwarding_and_padded_program_agree() {
    let dependent = [
        addiu(1, 0, 6),
        addiu(2, 1, 7),
        add(3, 1, 2),
        mult(3, 2),
        mflo(4),
        lui(5, 0x1001),
        sw(4, 4, 5),
        lw(6, 4, 5),
        sra(7, 6, 1),
        addiu(2, 0, 10),
        syscall(),
    ];
    // Same program with enough NOPs that no hazard ever reaches Decode.
    let padded: Vec<u32> = dependent
        .iter()
        .flat_map(|&w| [w, NOP, NOP, NOP])
        .collect();

    let fast = run(&dependent, true);
    let slow = run(&padded, false);

    assert_eq!(fast.state().regs, slow.state().regs);
    assert_eq!((fast.state().hi, fast.state().lo), (slow.state().hi, slow.state().lo));
    assert_eq!(
        fast.memory().read_u32(MEM_DATA_BEGIN + 4),
        slow.memory().read_u32(MEM_DATA_BEGIN + 4)
    );
    assert_eq!(fast.state().regs.read(4), 19 * 13);
    assert_eq!(fast.state().regs.read(7), 19 * 13 / 2);
    assert_eq!(slow.stats().stalls_data, 0);
}

#[test]
fn loop_sums_data_words() {
    // Sum four words at the data base with a counted loop.
    let program = [
        lui(8, 0x1001),     // 0: base
        addiu(9, 0, 4),     // 1: count
        addu(10, 0, 0),     // 2: sum
        lw(11, 0, 8),       // 3: loop
        addu(10, 10, 11),   // 4
        addiu(8, 8, 4),     // 5
        addiu(9, 9, -1),    // 6
        bne(9, 0, -4),      // 7: -> 3
        addiu(2, 0, 10),    // 8
        syscall(),          // 9
    ];
    for forwarding in [false, true] {
        init_tracing();
        let mut sim = Simulator::new(Config::default());
        sim.set_forwarding(forwarding);
        sim.load_program(&program).expect("program fits");
        for (i, v) in [3u32, 5, 7, 11].into_iter().enumerate() {
            sim.write_memory(MEM_DATA_BEGIN + 4 * i as u32, v);
        }
        let summary = sim.run_to_completion().expect("run");
        assert!(summary.halted);
        assert_eq!(sim.state().regs.read(10), 26);
        assert_eq!(sim.stats().branches_taken, 3);
        assert_eq!(sim.stats().loads, 4);
    }
}

#[test]
fn instruction_behind_exit_leaves_hi_lo() {
    for follower in [mult(1, 1), mthi(1), mtlo(1)] {
        for forwarding in [false, true] {
            let sim = run(
                &[addiu(2, 0, 10), addiu(1, 0, 5), NOP, NOP, syscall(), follower],
                forwarding,
            );
            assert_eq!((sim.state().hi, sim.state().lo), (0, 0));
        }
    }
}

#[test]
fn jump_behind_exit_is_not_taken() {
    let sim = run(
        &[addiu(2, 0, 10), NOP, NOP, syscall(), j(0x0010_0000)],
        false,
    );
    assert_eq!(sim.stats().branches_taken, 0);
}
