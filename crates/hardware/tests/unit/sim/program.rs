//! Program storage tests.

use regsim_core::common::reg::ByteRegister;
use regsim_core::isa::Instruction;
use regsim_core::sim::Program;

#[test]
fn test_push_and_pop_from_the_end() {
    let mut program = Program::new();
    program.push(Instruction::mov(ByteRegister::AL, 1));
    program.push(Instruction::mov(ByteRegister::AL, 2));
    assert_eq!(program.len(), 2);
    assert_eq!(program.pop(), Some(Instruction::mov(ByteRegister::AL, 2)));
    assert_eq!(program[0], Instruction::mov(ByteRegister::AL, 1));
    assert_eq!(program.pop(), Some(Instruction::mov(ByteRegister::AL, 1)));
    assert_eq!(program.pop(), None);
    assert!(program.is_empty());
}

#[test]
fn test_to_text_joins_lines_without_trailing_newline() {
    let program: Program = [
        Instruction::mov(ByteRegister::AL, 50),
        Instruction::add(ByteRegister::AL, ByteRegister::BL),
    ]
    .into_iter()
    .collect();
    assert_eq!(program.to_text(), "MOV AL, 50\nADD AL, BL");
}

#[test]
fn test_empty_program_text() {
    assert_eq!(Program::new().to_text(), "");
}

#[test]
fn test_iteration_order() {
    let program: Program = (0..5u8)
        .map(|v| Instruction::add(ByteRegister::CL, v))
        .collect();
    let values: Vec<_> = program.iter().map(|i| i.src).collect();
    assert_eq!(values.len(), 5);
    assert_eq!(program.get(4).map(|i| i.src), values.last().copied());
    assert!(program.get(5).is_none());
}
