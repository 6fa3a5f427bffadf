//! Instruction Decoder.
//!
//! This module turns one line of program text into a typed [`Instruction`]. The accepted
//! grammar is `OP DEST, SRC` where:
//! * `OP` is `MOV`, `ADD`, or `SUB`,
//! * `DEST` is an 8-bit register name,
//! * `SRC` is an 8-bit register name or a decimal literal in `0..=255`.
//!
//! Mnemonics and register names are case-insensitive and whitespace around tokens is
//! ignored. Decoding is pure: it never touches machine state, so a rejected line cannot
//! leave partial side effects.

use crate::common::error::DecodeError;
use crate::common::reg::ByteRegister;
use crate::isa::instruction::{Instruction, Operand, Operation};

/// Separator between the destination and source operands.
const OPERAND_SEPARATOR: char = ',';

/// Decodes a single program line.
///
/// # Errors
///
/// * [`DecodeError::MalformedLine`] for a wrong token count, a missing comma, or an unknown mnemonic.
/// * [`DecodeError::UnknownRegister`] for a name outside the register set.
/// * [`DecodeError::WideOperand`] for a 16-bit register used as an operand.
/// * [`DecodeError::InvalidLiteral`] for a numeric operand outside `0..=255`.
pub fn decode(line: &str) -> Result<Instruction, DecodeError> {
    let text = line.trim();
    let malformed = || DecodeError::MalformedLine(text.to_string());

    let (mnemonic, operands) = text
        .split_once(char::is_whitespace)
        .ok_or_else(malformed)?;
    let op: Operation = mnemonic.parse().map_err(|_| malformed())?;

    let (dest, src) = operands
        .split_once(OPERAND_SEPARATOR)
        .ok_or_else(malformed)?;
    let (dest, src) = (dest.trim(), src.trim());
    if !is_single_token(dest) || !is_single_token(src) {
        return Err(malformed());
    }

    let dest: ByteRegister = dest.parse()?;
    let src = decode_operand(src)?;

    Ok(Instruction { op, dest, src })
}

/// Decodes the source operand.
///
/// Anything that starts like a number (a digit or a sign) is treated as a literal, which must
/// be plain decimal digits in `0..=255`; everything else must be a register name.
///
/// # Errors
///
/// [`DecodeError::InvalidLiteral`] for numeric tokens outside `0..=255`, otherwise the
/// register-name errors of [`ByteRegister`]'s parser.
pub fn decode_operand(token: &str) -> Result<Operand, DecodeError> {
    let token = token.trim();
    let looks_numeric = token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+');

    if looks_numeric {
        // Unsigned decimal only; `u8::from_str` alone would accept `+5`.
        let digits_only = token.bytes().all(|b| b.is_ascii_digit());
        match token.parse::<u8>() {
            Ok(val) if digits_only => Ok(Operand::Literal(val)),
            _ => Err(DecodeError::InvalidLiteral(token.to_string())),
        }
    } else {
        token.parse::<ByteRegister>().map(Operand::Register)
    }
}

fn is_single_token(token: &str) -> bool {
    !token.is_empty() && !token.contains(char::is_whitespace) && !token.contains(OPERAND_SEPARATOR)
}
