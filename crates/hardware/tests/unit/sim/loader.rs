//! # Program Loader Tests
//!
//! Parsing program text and round-tripping program files through disk.

use std::fs;

use pretty_assertions::assert_eq;
use regsim_core::common::{DecodeError, LoaderError};
use regsim_core::sim::loader::{load_program, parse_program, save_program};
use tempfile::tempdir;

#[test]
fn test_parse_skips_blank_lines() {
    let program = parse_program("MOV AL, 50\n\n   \nADD AL, 10\r\nSUB AL, 100\n").unwrap();
    assert_eq!(program.to_text(), "MOV AL, 50\nADD AL, 10\nSUB AL, 100");
}

#[test]
fn test_parse_reports_first_bad_line() {
    let err = parse_program("MOV AL, 1\n\nADD AL, 300\nMOV EL, 1").unwrap_err();
    match err {
        LoaderError::Decode { line, source } => {
            assert_eq!(line, 3);
            assert_eq!(source, DecodeError::InvalidLiteral("300".into()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prog.txt");
    let program = parse_program("mov al, 5\nadd  al ,bl").unwrap();

    save_program(&path, &program).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "MOV AL, 5\nADD AL, BL");
    assert_eq!(load_program(&path).unwrap(), program);
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    assert!(matches!(load_program(&path), Err(LoaderError::Io { .. })));
}

#[test]
fn test_load_rejects_bad_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "MOV AL, 1\nMOV AX, 1\n").unwrap();
    assert!(matches!(
        load_program(&path),
        Err(LoaderError::Decode { line: 2, .. })
    ));
}

#[test]
fn test_empty_file_is_empty_program() {
    assert!(parse_program("").unwrap().is_empty());
}
