//! Digit-count histogram of a set of integers.

use std::collections::BTreeMap;

use num_bigint::BigUint;

use crate::digits::digit_length;

/// Maps a decimal digit length (1-based) to the number of values with that many digits.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct DigitHistogram {
    counts: BTreeMap<usize, usize>,
}

impl DigitHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, n: &BigUint) {
        *self.counts.entry(digit_length(n)).or_insert(0) += 1;
    }

    /// Number of values with exactly `len` digits.
    pub fn get(&self, len: usize) -> usize {
        self.counts.get(&len).copied().unwrap_or(0)
    }

    /// Largest digit length present, or `0` if the histogram is empty.
    pub fn max_len(&self) -> usize {
        self.counts.keys().next_back().copied().unwrap_or(0)
    }

    /// Largest single bucket.
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Dense `(len, count)` pairs for every length from `1` to [`max_len`][Self::max_len],
    /// including empty buckets.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..=self.max_len()).map(|len| (len, self.get(len)))
    }
}

impl<'a> FromIterator<&'a BigUint> for DigitHistogram {
    fn from_iter<I: IntoIterator<Item = &'a BigUint>>(iter: I) -> Self {
        let mut hist = DigitHistogram::new();
        for n in iter {
            hist.add(n);
        }
        hist
    }
}
