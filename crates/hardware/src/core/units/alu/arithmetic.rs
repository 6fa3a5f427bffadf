//! ALU arithmetic operations.
//!
//! Implements 8-bit addition and subtraction clamped to `0..=255`. There are no negative
//! numbers and no wraparound: a result below zero becomes `0`, a result above `255`
//! becomes `255`.

/// Smallest value a register can hold.
pub const REG_MIN: u8 = u8::MIN;

/// Largest value a register can hold.
pub const REG_MAX: u8 = u8::MAX;

/// Adds `b` to `a`, clamping at [`REG_MAX`].
///
/// # Returns
///
/// The clamped sum and whether clamping occurred.
#[inline]
pub const fn add(a: u8, b: u8) -> (u8, bool) {
    match a.checked_add(b) {
        Some(sum) => (sum, false),
        None => (REG_MAX, true),
    }
}

/// Subtracts `b` from `a`, clamping at [`REG_MIN`].
///
/// # Returns
///
/// The clamped difference and whether clamping occurred.
#[inline]
pub const fn sub(a: u8, b: u8) -> (u8, bool) {
    match a.checked_sub(b) {
        Some(diff) => (diff, false),
        None => (REG_MIN, true),
    }
}
