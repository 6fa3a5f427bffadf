//! # Register Naming Tests
//!
//! Verifies register name parsing and the fixed relationship between each
//! 16-bit register and its two 8-bit halves.

use pretty_assertions::assert_eq;
use regsim_core::common::reg::{ByteRegister, RegisterName, WideRegister};
use regsim_core::common::DecodeError;
use rstest::rstest;

#[rstest]
#[case("AX", RegisterName::Wide(WideRegister::AX))]
#[case("dx", RegisterName::Wide(WideRegister::DX))]
#[case("al", RegisterName::Byte(ByteRegister::AL))]
#[case(" CH ", RegisterName::Byte(ByteRegister::CH))]
#[case("Bl", RegisterName::Byte(ByteRegister::BL))]
fn test_parse_register_names(#[case] text: &str, #[case] expected: RegisterName) {
    assert_eq!(text.parse::<RegisterName>(), Ok(expected));
}

#[rstest]
#[case("EX")]
#[case("A")]
#[case("ALX")]
#[case("")]
#[case("x0")]
fn test_unknown_register_names(#[case] text: &str) {
    assert!(matches!(
        text.parse::<RegisterName>(),
        Err(DecodeError::UnknownRegister(_))
    ));
}

#[test]
fn test_byte_register_rejects_wide_name() {
    assert_eq!(
        "BX".parse::<ByteRegister>(),
        Err(DecodeError::WideOperand(WideRegister::BX))
    );
}

#[test]
fn test_twelve_names_in_display_order() {
    let names: Vec<&str> = RegisterName::ALL.iter().map(|r| r.name()).collect();
    assert_eq!(
        names,
        ["AX", "AH", "AL", "BX", "BH", "BL", "CX", "CH", "CL", "DX", "DH", "DL"]
    );
}

#[test]
fn test_wide_halves_round_trip_through_owner() {
    for wide in WideRegister::ALL {
        assert_eq!(wide.high().owner(), wide);
        assert_eq!(wide.low().owner(), wide);
        assert!(wide.high().is_high());
        assert!(!wide.low().is_high());
    }
}

#[test]
fn test_byte_indices_are_distinct_slots() {
    let mut seen = [false; 8];
    for reg in ByteRegister::ALL {
        assert!(!seen[reg.index()], "{reg} shares a slot");
        seen[reg.index()] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_bits() {
    assert_eq!(RegisterName::from(WideRegister::CX).bits(), 16);
    assert_eq!(RegisterName::from(ByteRegister::CL).bits(), 8);
}

#[test]
fn test_display_matches_name() {
    for reg in RegisterName::ALL {
        assert_eq!(reg.to_string(), reg.name());
    }
}
