use std::fmt;

use num_bigint::BigUint;

use crate::digits::{contains_zero, truncations};
use crate::direction::Direction;
use crate::histogram::DigitHistogram;
use crate::oracle::PrimalityTest;

/// Checks that `n` is a truncatable prime in the given direction:
/// `n` and every number obtained by repeatedly truncating it are (probably) prime.
///
/// A left-truncatable prime must not contain `0`, since truncating at a zero
/// would silently drop more than one digit.
pub fn is_truncatable_prime<T: PrimalityTest>(n: &BigUint, direction: Direction, oracle: &mut T) -> bool {
    if *n < BigUint::from(2u32) {
        return false;
    }
    if direction == Direction::Left && contains_zero(n) {
        return false;
    }
    truncations(n, direction)
        .iter()
        .all(|t| *t >= BigUint::from(2u32) && oracle.is_probable_prime(t))
}

/// All truncatable primes for one direction, strictly ascending.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruncatablePrimes {
    direction: Direction,
    primes: Vec<BigUint>,
}

impl TruncatablePrimes {
    /// Wraps `primes`, sorting and deduplicating them.
    pub fn new(direction: Direction, mut primes: Vec<BigUint>) -> Self {
        primes.sort_unstable();
        primes.dedup();
        Self { direction, primes }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn as_slice(&self) -> &[BigUint] {
        &self.primes
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BigUint> {
        self.primes.iter()
    }

    pub fn largest(&self) -> Option<&BigUint> {
        self.primes.last()
    }

    pub fn contains(&self, n: &BigUint) -> bool {
        self.primes.binary_search(n).is_ok()
    }

    pub fn histogram(&self) -> DigitHistogram {
        self.primes.iter().collect()
    }

    /// Re-checks every member with `oracle`.
    ///
    /// Returns the first member that is not a truncatable prime, if any.
    pub fn verify<T: PrimalityTest>(&self, oracle: &mut T) -> Result<(), BigUint> {
        for p in &self.primes {
            if !is_truncatable_prime(p, self.direction, oracle) {
                log::warn!("{} is not a {}-truncatable prime", p, self.direction);
                return Err(p.clone());
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TruncatablePrimes {
    type Item = &'a BigUint;
    type IntoIter = std::slice::Iter<'a, BigUint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TruncatablePrimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.primes {
            writeln!(f, "{}", p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::oracle::MillerRabin;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_new_sorts_and_dedups() {
        let primes = TruncatablePrimes::new(Direction::Right, vec![big(7), big(2), big(7), big(3)]);
        assert_eq!(primes.as_slice(), &[big(2), big(3), big(7)]);
        assert_eq!(primes.len(), 3);
        assert_eq!(primes.largest(), Some(&big(7)));
        assert!(primes.contains(&big(3)));
        assert!(!primes.contains(&big(5)));
    }

    #[test]
    fn test_is_truncatable_prime() {
        let mut mr = MillerRabin::seeded(0);
        assert!(is_truncatable_prime(&big(3797), Direction::Left, &mut mr));
        assert!(is_truncatable_prime(&big(3797), Direction::Right, &mut mr));
        assert!(is_truncatable_prime(&big(73939133), Direction::Right, &mut mr));
        assert!(!is_truncatable_prime(&big(73939133), Direction::Left, &mut mr));
        // 103 -> 3 numerically, but the zero disqualifies it
        assert!(!is_truncatable_prime(&big(103), Direction::Left, &mut mr));
        // 19 -> 9 is not prime
        assert!(!is_truncatable_prime(&big(19), Direction::Left, &mut mr));
        assert!(!is_truncatable_prime(&big(20), Direction::Right, &mut mr));
        assert!(!is_truncatable_prime(&big(1), Direction::Right, &mut mr));
        // 11 -> 1 is below two
        assert!(!is_truncatable_prime(&big(11), Direction::Left, &mut mr));
    }

    #[test]
    fn test_verify() {
        let mut mr = MillerRabin::seeded(0);
        let good = TruncatablePrimes::new(Direction::Right, vec![big(2), big(23), big(239)]);
        assert_eq!(good.verify(&mut mr), Ok(()));
        let bad = TruncatablePrimes::new(Direction::Right, vec![big(2), big(23), big(41)]);
        assert_eq!(bad.verify(&mut mr), Err(big(41)));
    }

    #[test]
    fn test_display() {
        let primes = TruncatablePrimes::new(Direction::Left, vec![big(23), big(2)]);
        assert_eq!(primes.to_string(), "2\n23\n");
    }
}
