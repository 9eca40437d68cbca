//! Probabilistic primality testing.
//!
//! The [`MillerRabin`] oracle answers "composite" with certainty and
//! "probably prime" when none of its randomly drawn bases is a witness of
//! compositeness. Each trial that fails to find a witness cuts the chance of
//! a false "probably prime" by at least a factor of four.

use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default number of Miller–Rabin trials per number.
pub const DEFAULT_TRIALS: usize = 5;

/// A (possibly probabilistic) primality test.
pub trait PrimalityTest {
    /// Returns `false` if `n` is composite, `true` if `n` is (probably) prime.
    ///
    /// # Panics
    ///
    /// Implementations panic if `n < 2`.
    fn is_probable_prime(&mut self, n: &BigUint) -> bool;
}

/// Miller–Rabin test with bases drawn from an injected random source.
#[derive(Debug, Clone)]
pub struct MillerRabin<R> {
    rng: R,
    trials: usize,
    tested: usize,
    rejected: usize,
}

impl<R: Rng> MillerRabin<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            trials: DEFAULT_TRIALS,
            tested: 0,
            rejected: 0,
        }
    }

    /// Sets the number of random bases tried per number.
    ///
    /// # Panics
    ///
    /// Panics if `trials == 0`.
    pub fn with_trials(mut self, trials: usize) -> Self {
        assert!(trials > 0, "Number of trials must be positive");
        self.trials = trials;
        self
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Total number of calls to [`is_probable_prime`][PrimalityTest::is_probable_prime].
    pub fn tested(&self) -> usize {
        self.tested
    }

    /// Number of calls that returned "composite".
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    fn check(&mut self, n: &BigUint) -> bool {
        assert!(*n >= BigUint::from(2u32), "Primality test requires n >= 2, got {}", n);

        if *n == BigUint::from(2u32) {
            return true;
        }
        if !n.bit(0) {
            return false;
        }

        // n - 1 = 2^s * d, d odd
        let n_minus_one = n - 1u32;
        let mut s = 0u64;
        let mut d = n_minus_one.clone();
        while !d.bit(0) {
            d >>= 1u32;
            s += 1;
        }
        assert_eq!(&d << s, n_minus_one, "Decomposition n - 1 = 2^s * d is broken");

        for _ in 0..self.trials {
            // Base in [2, n-1]
            let a = random_below(&mut self.rng, &(n - 2u32)) + 2u32;
            if is_witness(&a, n, &n_minus_one, &d, s) {
                return false;
            }
        }
        true
    }
}

impl MillerRabin<StdRng> {
    /// Oracle with a reproducible random source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Oracle seeded from operating system entropy.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl Default for MillerRabin<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: Rng> PrimalityTest for MillerRabin<R> {
    fn is_probable_prime(&mut self, n: &BigUint) -> bool {
        let verdict = self.check(n);
        self.tested += 1;
        if !verdict {
            self.rejected += 1;
        }
        verdict
    }
}

/// Returns `true` if `a` proves that odd `n` is composite.
///
/// `a` is *not* a witness when `a^d ≡ 1` or `a^(2^i·d) ≡ n-1 (mod n)` for some `0 <= i < s`.
fn is_witness(a: &BigUint, n: &BigUint, n_minus_one: &BigUint, d: &BigUint, s: u64) -> bool {
    let mut x = a.modpow(d, n);
    if x == BigUint::from(1u32) || x == *n_minus_one {
        return false;
    }
    for _ in 1..s {
        x = (&x * &x) % n;
        if x == *n_minus_one {
            return false;
        }
    }
    true
}

/// Draws a uniformly random integer from `[0, bound)` by rejection sampling.
///
/// # Panics
///
/// Panics if `bound` is zero.
fn random_below<R: Rng>(rng: &mut R, bound: &BigUint) -> BigUint {
    assert!(*bound > BigUint::ZERO, "Sampling bound must be positive");

    let bits = bound.bits();
    let len = bits.div_ceil(8) as usize;
    let excess = (len as u64 * 8 - bits) as u32;
    let mask = 0xFFu8 >> excess;

    let mut bytes = vec![0u8; len];
    loop {
        rng.fill(bytes.as_mut_slice());
        // Little-endian: the last byte holds the top bits.
        if let Some(top) = bytes.last_mut() {
            *top &= mask;
        }
        let x = BigUint::from_bytes_le(&bytes);
        if x < *bound {
            return x;
        }
    }
}
