//! Memory Stage Tests.

use mipsim_core::common::constants::MEM_DATA_BEGIN;
use mipsim_core::core::pipeline::latches::ExMem;
use mipsim_core::core::pipeline::stages::mem_stage;

use crate::common::builder::instruction::*;
use crate::common::builder::pipeline_state::ExMemBuilder;
use crate::common::harness::TestContext;

const PC: u32 = 0x0040_0000;

#[test]
fn load_word_fills_lmd() {
    let mut ctx = TestContext::new();
    ctx.cpu.bus.write_u32(MEM_DATA_BEGIN, 0x1234_5678);
    ctx.cpu.ex_mem = ExMem::holding(ExMemBuilder::new(PC, lw(1, 0, 4)).alu(MEM_DATA_BEGIN).build());
    mem_stage(&mut ctx.cpu);

    let entry = ctx.cpu.mem_wb.entry.expect("MEM/WB should be occupied");
    assert_eq!(entry.lmd, 0x1234_5678);
    assert_eq!(entry.result(), 0x1234_5678);
    assert_eq!(ctx.cpu.stats.loads, 1);
}

#[test]
fn load_byte_sign_extends() {
    let mut ctx = TestContext::new();
    ctx.cpu.bus.write_u8(MEM_DATA_BEGIN + 1, 0x80);
    ctx.cpu.ex_mem = ExMem::holding(
        ExMemBuilder::new(PC, lb(1, 1, 4))
            .alu(MEM_DATA_BEGIN + 1)
            .build(),
    );
    mem_stage(&mut ctx.cpu);
    assert_eq!(ctx.cpu.mem_wb.entry.map(|e| e.lmd), Some(0xFFFF_FF80));
}

#[test]
fn store_word_writes_memory() {
    let mut ctx = TestContext::new();
    ctx.cpu.ex_mem = ExMem::holding(
        ExMemBuilder::new(PC, sw(3, 0, 4))
            .alu(MEM_DATA_BEGIN + 4)
            .store_data(15)
            .build(),
    );
    mem_stage(&mut ctx.cpu);
    assert_eq!(ctx.cpu.bus.read_u32(MEM_DATA_BEGIN + 4), 15);
    assert_eq!(ctx.cpu.stats.stores, 1);
}

#[test]
fn store_byte_writes_low_byte_only() {
    let mut ctx = TestContext::new();
    ctx.cpu.bus.write_u32(MEM_DATA_BEGIN, 0xAAAA_AAAA);
    ctx.cpu.ex_mem = ExMem::holding(
        ExMemBuilder::new(PC, sb(3, 0, 4))
            .alu(MEM_DATA_BEGIN)
            .store_data(0x1234_5655)
            .build(),
    );
    mem_stage(&mut ctx.cpu);
    assert_eq!(ctx.cpu.bus.read_u32(MEM_DATA_BEGIN), 0xAAAA_AA55);
}

#[test]
fn store_to_unmapped_address_is_discarded() {
    let mut ctx = TestContext::new();
    ctx.cpu.ex_mem = ExMem::holding(ExMemBuilder::new(PC, sw(3, 0, 0)).store_data(15).build());
    mem_stage(&mut ctx.cpu);
    assert_eq!(ctx.cpu.bus.read_u32(0), 0);
    assert!(ctx.cpu.mem_wb.entry.is_some());
}

#[test]
fn alu_result_passes_through() {
    let mut ctx = TestContext::new();
    ctx.cpu.ex_mem = ExMem::holding(ExMemBuilder::new(PC, addiu(1, 0, 3)).alu(3).build());
    mem_stage(&mut ctx.cpu);
    assert_eq!(ctx.cpu.mem_wb.entry.map(|e| e.result()), Some(3));
    assert_eq!(ctx.cpu.stats.loads + ctx.cpu.stats.stores, 0);
}

#[test]
fn bubble_propagates() {
    let mut ctx = TestContext::new();
    mem_stage(&mut ctx.cpu);
    assert!(ctx.cpu.mem_wb.entry.is_none());
}
