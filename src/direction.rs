//! Truncation direction.
//!
//! A left-truncatable prime stays prime when its *leading* digit is removed,
//! so the search grows it by prepending digits.
//! A right-truncatable prime stays prime when its *trailing* digit is removed,
//! so the search grows it by appending digits.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::digits::{append_digit, prepend_digit};

/// Which end of the number is truncated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Direction {
    /// Strip the leading digit; extend by prepending.
    Left,
    /// Strip the trailing digit; extend by appending.
    Right,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// Digits tried when extending a candidate.
    ///
    /// Prepending `0` yields the same value again, so left extension starts at `1`.
    /// Appending `0` is a real (always even) candidate, so right extension starts at `0`.
    pub fn extension_digits(self) -> RangeInclusive<u8> {
        match self {
            Direction::Left => 1..=9,
            Direction::Right => 0..=9,
        }
    }

    /// Extends `n` by a single decimal `digit` on the side opposite to truncation.
    ///
    /// # Panics
    ///
    /// Panics if `digit > 9`.
    pub fn extend(self, n: &BigUint, digit: u8) -> BigUint {
        match self {
            Direction::Left => prepend_digit(n, digit),
            Direction::Right => append_digit(n, digit),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing a [`Direction`] from text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseDirectionError {
    /// Input was empty (after trimming).
    Empty,
    /// Input was neither `left` nor `right`.
    Unknown(String),
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDirectionError::Empty => write!(f, "empty direction"),
            ParseDirectionError::Unknown(s) => {
                write!(f, "unknown direction '{}', expected 'left' or 'right'", s)
            }
        }
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDirectionError::Empty);
        }
        if s.eq_ignore_ascii_case("left") {
            Ok(Direction::Left)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(Direction::Right)
        } else {
            Err(ParseDirectionError::Unknown(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("left".parse(), Ok(Direction::Left));
        assert_eq!("Right".parse(), Ok(Direction::Right));
        assert_eq!(" LEFT ".parse(), Ok(Direction::Left));
        assert_eq!("".parse::<Direction>(), Err(ParseDirectionError::Empty));
        assert_eq!(
            "up".parse::<Direction>(),
            Err(ParseDirectionError::Unknown("up".to_string()))
        );
    }

    #[test]
    fn test_display_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse(), Ok(dir));
        }
    }

    #[test]
    fn test_extension_digits() {
        assert!(!Direction::Left.extension_digits().contains(&0));
        assert_eq!(Direction::Left.extension_digits().count(), 9);
        assert!(Direction::Right.extension_digits().contains(&0));
        assert_eq!(Direction::Right.extension_digits().count(), 10);
    }

    #[test]
    fn test_extend() {
        let n = BigUint::from(23u32);
        assert_eq!(Direction::Left.extend(&n, 1), BigUint::from(123u32));
        assert_eq!(Direction::Right.extend(&n, 9), BigUint::from(239u32));
        assert_eq!(Direction::Right.extend(&n, 0), BigUint::from(230u32));
    }
}
