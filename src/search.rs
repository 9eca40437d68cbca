//! Breadth-first search for truncatable primes.
//!
//! The search keeps a *frontier* of candidates that all have the same number of digits.
//! Each [round][Search::step] tests every frontier candidate, records the primes,
//! and extends each prime by one digit; the extensions that are themselves prime
//! become the next frontier. The search ends when a round produces no new frontier.
//!
//! Every prime produced this way is truncatable by construction: stripping the digit
//! added last walks back through the chain of primes that generated it.

use std::collections::BTreeSet;
use std::mem;

use num_bigint::BigUint;

use crate::direction::Direction;
use crate::oracle::{MillerRabin, PrimalityTest};
use crate::truncatable::TruncatablePrimes;

/// Initial frontier: all single digits from `2` to `9`.
pub const SEEDS: std::ops::RangeInclusive<u32> = 2..=9;

/// Counters collected while searching.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SearchStats {
    /// Completed rounds.
    pub rounds: usize,
    /// Frontier candidates evaluated. Each candidate is counted exactly once.
    pub candidates: usize,
    /// Insertions into the result set, duplicates included.
    pub primes: usize,
}

pub struct Search<T> {
    oracle: T,
    direction: Direction,
    frontier: Vec<BigUint>,
    found: BTreeSet<BigUint>,
    stats: SearchStats,
}

impl<T: PrimalityTest> Search<T> {
    pub fn new(direction: Direction, oracle: T) -> Self {
        Self {
            oracle,
            direction,
            frontier: SEEDS.map(BigUint::from).collect(),
            found: BTreeSet::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn oracle(&self) -> &T {
        &self.oracle
    }

    /// Candidates awaiting evaluation in the next round, in ascending order.
    pub fn frontier(&self) -> &[BigUint] {
        &self.frontier
    }

    /// Number of distinct primes found so far.
    pub fn found(&self) -> usize {
        self.found.len()
    }

    pub fn is_done(&self) -> bool {
        self.frontier.is_empty()
    }

    fn record(&mut self, n: BigUint) {
        self.stats.primes += 1;
        self.found.insert(n);
    }

    /// Processes one full round over the current frontier.
    ///
    /// Returns `true` if another round is pending.
    pub fn step(&mut self) -> bool {
        if self.frontier.is_empty() {
            return false;
        }

        let current = mem::take(&mut self.frontier);
        let mut next = Vec::new();
        let found_before = self.found.len();

        for candidate in current {
            self.stats.candidates += 1;
            if !self.oracle.is_probable_prime(&candidate) {
                continue;
            }
            self.record(candidate.clone());
            for digit in self.direction.extension_digits() {
                let extended = self.direction.extend(&candidate, digit);
                if self.oracle.is_probable_prime(&extended) {
                    self.record(extended.clone());
                    next.push(extended);
                }
            }
        }

        next.sort_unstable();
        next.dedup();

        self.stats.rounds += 1;
        log::debug!(
            "{} round {}: {} new primes, {} in next frontier",
            self.direction,
            self.stats.rounds,
            self.found.len() - found_before,
            next.len()
        );

        self.frontier = next;
        !self.frontier.is_empty()
    }

    /// Runs rounds until the frontier is exhausted and returns every prime found.
    pub fn run(&mut self) -> TruncatablePrimes {
        while self.step() {}
        log::info!(
            "Found {} {}-truncatable primes in {} rounds ({} candidates)",
            self.found.len(),
            self.direction,
            self.stats.rounds,
            self.stats.candidates
        );
        self.result()
    }

    /// Primes found so far, ascending.
    pub fn result(&self) -> TruncatablePrimes {
        TruncatablePrimes::new(self.direction, self.found.iter().cloned().collect())
    }
}

/// Finds all truncatable primes in the given direction, using an OS-seeded oracle.
pub fn search(direction: Direction) -> TruncatablePrimes {
    search_with(direction, MillerRabin::from_os_rng())
}

/// Finds all truncatable primes in the given direction, using the given oracle.
pub fn search_with<T: PrimalityTest>(direction: Direction, oracle: T) -> TruncatablePrimes {
    Search::new(direction, oracle).run()
}
