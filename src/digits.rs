//! Decimal digit arithmetic on arbitrary-precision integers.
//!
//! All lengths here are computed by counting digits, never via `log10`,
//! which loses precision around powers of ten once values outgrow `f64`.

use num_bigint::BigUint;

use crate::direction::Direction;

fn pow10(exp: usize) -> BigUint {
    BigUint::from(10u32).pow(exp as u32)
}

/// Number of decimal digits in `n`. Zero has one digit.
pub fn digit_length(n: &BigUint) -> usize {
    n.to_str_radix(10).len()
}

/// Returns `true` if the decimal representation of `n` contains a `0` digit.
pub fn contains_zero(n: &BigUint) -> bool {
    n.to_str_radix(10).contains('0')
}

/// Prepends `digit` to `n`: `digit·10^len(n) + n`.
///
/// Prepending `0` gives back `n` unchanged.
///
/// # Panics
///
/// Panics if `digit > 9`.
pub fn prepend_digit(n: &BigUint, digit: u8) -> BigUint {
    assert!(digit <= 9, "Digit must be in the range 0..=9, got {}", digit);
    BigUint::from(digit) * pow10(digit_length(n)) + n
}

/// Appends `digit` to `n`: `10·n + digit`.
///
/// # Panics
///
/// Panics if `digit > 9`.
pub fn append_digit(n: &BigUint, digit: u8) -> BigUint {
    assert!(digit <= 9, "Digit must be in the range 0..=9, got {}", digit);
    n * 10u32 + digit
}

/// Successive truncations of `n` in the given direction, starting with `n` itself
/// and ending with a single digit.
///
/// For example, `truncations(3797, Left)` is `[3797, 797, 97, 7]`
/// and `truncations(3797, Right)` is `[3797, 379, 37, 3]`.
///
/// Left truncation is numeric, so a zero after the stripped digit vanishes:
/// `103` truncates to `3`, not `03`.
pub fn truncations(n: &BigUint, direction: Direction) -> Vec<BigUint> {
    let len = digit_length(n);
    match direction {
        Direction::Left => (1..=len).rev().map(|k| n % pow10(k)).collect(),
        Direction::Right => (0..len).map(|k| n / pow10(k)).collect(),
    }
}
