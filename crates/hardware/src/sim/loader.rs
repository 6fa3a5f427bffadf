//! Program Loader.
//!
//! This module converts between program text and [`Program`] values. It performs:
//! 1. **Parsing:** Decodes one instruction per non-blank line, reporting the first bad line.
//! 2. **Loading:** Reads a program file from disk.
//! 3. **Saving:** Writes the canonical text of a program to disk.
//!
//! Parsing is all-or-nothing, so a rejected file never replaces a working program.

use std::fs;
use std::path::Path;

use crate::common::error::LoaderError;
use crate::isa::decode::decode;
use crate::sim::program::Program;

/// Parses program text.
///
/// Blank lines are skipped; every other line must be a valid instruction.
///
/// # Errors
///
/// Returns [`LoaderError::Decode`] with the 1-based number of the first invalid line.
pub fn parse_program(text: &str) -> Result<Program, LoaderError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            decode(line).map_err(|source| LoaderError::Decode {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

/// Reads and parses a program file.
///
/// # Errors
///
/// Returns [`LoaderError::Io`] if the file cannot be read, or [`LoaderError::Decode`] for
/// the first invalid line.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, LoaderError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&text)?;
    tracing::info!(path = %path.display(), instructions = program.len(), "loaded program");
    Ok(program)
}

/// Writes `program` to `path` in canonical text form.
///
/// # Errors
///
/// Returns [`LoaderError::Io`] if the file cannot be written.
pub fn save_program(path: impl AsRef<Path>, program: &Program) -> Result<(), LoaderError> {
    let path = path.as_ref();
    fs::write(path, program.to_text()).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), instructions = program.len(), "saved program");
    Ok(())
}
