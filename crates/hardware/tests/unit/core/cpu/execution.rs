//! # Execution Tests
//!
//! MOV/ADD/SUB applied directly to a CPU's register file.

use regsim_core::Cpu;
use regsim_core::common::reg::{ByteRegister, WideRegister};
use regsim_core::config::Config;
use regsim_core::isa::Instruction;

use ByteRegister::{AH, AL, BH, BL, CL};

fn cpu() -> Cpu {
    Cpu::new(&Config::default())
}

#[test]
fn test_mov_literal() {
    let mut cpu = cpu();
    let result = cpu.execute(&Instruction::mov(AL, 42));
    assert_eq!(result.value, 42);
    assert!(!result.saturated);
    assert_eq!(cpu.regs.read_byte(AL), 42);
}

#[test]
fn test_mov_register_copies_exact_byte() {
    let mut cpu = cpu();
    cpu.regs.write_byte(BH, 0xAB);
    cpu.regs.write_byte(BL, 0xCD);
    let _ = cpu.execute(&Instruction::mov(AL, BH));
    assert_eq!(cpu.regs.read_byte(AL), 0xAB);
    assert_eq!(cpu.regs.read_wide(WideRegister::AX), 0x00AB);
    assert_eq!(cpu.regs.read_wide(WideRegister::BX), 0xABCD);
}

#[test]
fn test_add_register_source() {
    let mut cpu = cpu();
    cpu.regs.write_byte(AL, 30);
    cpu.regs.write_byte(CL, 12);
    let _ = cpu.execute(&Instruction::add(AL, CL));
    assert_eq!(cpu.regs.read_byte(AL), 42);
    assert_eq!(cpu.regs.read_byte(CL), 12);
}

#[test]
fn test_add_saturates() {
    let mut cpu = cpu();
    cpu.regs.write_byte(AL, 200);
    let result = cpu.execute(&Instruction::add(AL, 255));
    assert_eq!(cpu.regs.read_byte(AL), 255);
    assert!(result.saturated);
}

#[test]
fn test_sub_saturates() {
    let mut cpu = cpu();
    cpu.regs.write_byte(AL, 10);
    let result = cpu.execute(&Instruction::sub(AL, 255));
    assert_eq!(cpu.regs.read_byte(AL), 0);
    assert!(result.saturated);
}

#[test]
fn test_register_used_as_both_operands() {
    let mut cpu = cpu();
    cpu.regs.write_byte(AL, 100);
    let _ = cpu.execute(&Instruction::add(AL, AL));
    assert_eq!(cpu.regs.read_byte(AL), 200);
    let _ = cpu.execute(&Instruction::sub(AL, AL));
    assert_eq!(cpu.regs.read_byte(AL), 0);
}

#[test]
fn test_high_byte_destination_updates_wide() {
    let mut cpu = cpu();
    let _ = cpu.execute(&Instruction::mov(AL, 1));
    let _ = cpu.execute(&Instruction::mov(AH, 2));
    assert_eq!(cpu.regs.read_wide(WideRegister::AX), 2 * 256 + 1);
}

#[test]
fn test_traced_execution_matches_untraced() {
    let config = Config::from_json(r#"{ "general": { "trace_instructions": true } }"#).unwrap();
    let mut traced = Cpu::new(&config);
    assert!(traced.trace);
    let mut plain = cpu();
    for inst in [Instruction::mov(BL, 9), Instruction::add(BL, 250)] {
        assert_eq!(traced.execute(&inst), plain.execute(&inst));
    }
    assert_eq!(traced.regs, plain.regs);
}

#[test]
fn test_reset_zeroes_registers() {
    let mut cpu = cpu();
    let _ = cpu.execute(&Instruction::mov(CL, 5));
    cpu.reset();
    assert_eq!(cpu.regs.read_byte(CL), 0);
}
