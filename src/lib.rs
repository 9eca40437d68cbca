//! # truncprimes: truncatable primes in Rust
//!
//! A **left-truncatable prime** stays prime when its leading digits are removed one by one
//! (`3797 → 797 → 97 → 7`); a **right-truncatable prime** stays prime when its trailing
//! digits are removed (`3797 → 379 → 37 → 3`). There are finitely many of both in base 10:
//! 4260 left-truncatable and 83 right-truncatable primes.
//!
//! The crate finds all of them by growing candidates one digit at a time from the
//! single-digit seeds, keeping only the extensions that pass a Miller–Rabin test.
//!
//! ## Basic Usage
//!
//! ```rust
//! use num_bigint::BigUint;
//! use truncprimes::direction::Direction;
//! use truncprimes::oracle::MillerRabin;
//! use truncprimes::search::search_with;
//!
//! // Seeded oracle for a reproducible run
//! let primes = search_with(Direction::Right, MillerRabin::seeded(42));
//!
//! assert_eq!(primes.len(), 83);
//! assert_eq!(primes.largest(), Some(&BigUint::from(73939133u32)));
//! assert!(primes.contains(&BigUint::from(2399u32)));
//! ```
//!
//! ## Core Components
//!
//! - **[`oracle`]**: the [`PrimalityTest`][crate::oracle::PrimalityTest] trait and the
//!   [`MillerRabin`][crate::oracle::MillerRabin] test with an injectable random source.
//! - **[`search`]**: the round-by-round [`Search`][crate::search::Search].
//! - **[`histogram`]**: counts of results by number of digits.

pub mod digits;
pub mod direction;
pub mod histogram;
pub mod oracle;
pub mod search;
pub mod truncatable;
