//! Instruction representation tests.

use regsim_core::common::reg::ByteRegister;
use regsim_core::isa::{Instruction, Operand, Operation, decode};

#[test]
fn test_display_is_canonical_text() {
    assert_eq!(Instruction::add(ByteRegister::AL, 10).to_string(), "ADD AL, 10");
    assert_eq!(
        Instruction::mov(ByteRegister::BH, ByteRegister::CL).to_string(),
        "MOV BH, CL"
    );
}

#[test]
fn test_display_reparses_to_same_instruction() {
    let lines = ["mov al,5", "  SUB dh , bl", "add CL, 255"];
    for line in lines {
        let inst = decode(line).unwrap();
        assert_eq!(decode(&inst.to_string()), Ok(inst));
    }
}

#[test]
fn test_mnemonics() {
    let names: Vec<&str> = Operation::ALL.iter().map(|op| op.mnemonic()).collect();
    assert_eq!(names, ["MOV", "ADD", "SUB"]);
    assert_eq!("sub".parse::<Operation>(), Ok(Operation::Sub));
    assert!("mul".parse::<Operation>().is_err());
}

#[test]
fn test_operand_conversions() {
    assert_eq!(Operand::from(7u8), Operand::Literal(7));
    assert_eq!(
        Operand::from(ByteRegister::DL),
        Operand::Register(ByteRegister::DL)
    );
}

#[test]
fn test_instruction_serializes() {
    let json = serde_json::to_value(Instruction::sub(ByteRegister::AL, 1)).unwrap();
    assert_eq!(json["op"], "Sub");
    assert_eq!(json["dest"], "AL");
    assert_eq!(json["src"]["Literal"], 1);
}
