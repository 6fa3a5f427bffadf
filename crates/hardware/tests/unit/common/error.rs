//! # Error Tests
//!
//! Display text and source chaining of the decode, loader, and config errors.

use std::error::Error;
use std::path::PathBuf;

use regsim_core::common::reg::WideRegister;
use regsim_core::common::{ConfigError, DecodeError, LoaderError};

#[test]
fn test_unknown_register_display() {
    let err = DecodeError::UnknownRegister("EX".into());
    assert_eq!(err.to_string(), "unknown register `EX`");
}

#[test]
fn test_invalid_literal_display() {
    let err = DecodeError::InvalidLiteral("300".into());
    assert!(err.to_string().contains("`300`"));
    assert!(err.to_string().contains("0..=255"));
}

#[test]
fn test_malformed_line_display() {
    let err = DecodeError::MalformedLine("MOV AL".into());
    assert!(err.to_string().contains("OP DEST, SRC"));
}

#[test]
fn test_wide_operand_display() {
    let err = DecodeError::WideOperand(WideRegister::AX);
    assert!(err.to_string().starts_with("`AX` is a 16-bit register"));
}

#[test]
fn test_loader_decode_error_has_line_and_source() {
    let err = LoaderError::Decode {
        line: 3,
        source: DecodeError::UnknownRegister("ZZ".into()),
    };
    assert_eq!(err.to_string(), "line 3: unknown register `ZZ`");
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("unknown register `ZZ`"));
}

#[test]
fn test_loader_io_error_names_path() {
    let err = LoaderError::Io {
        path: PathBuf::from("missing.txt"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_config_parse_error_from_serde() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ConfigError::from(parse);
    assert!(err.to_string().starts_with("invalid config"));
}
