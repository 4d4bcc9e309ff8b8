//! Combinatorial number system (the Banker's sequence) for Rust
//!
//! This crate ranks and unranks fixed-width bit patterns:
//!
//! - `to(a, n)` finds the `n`-bit pattern at position `a` of the sequence
//! - `from(b)` finds the position of pattern `b`
//! - `next(b)` steps `b` to the next pattern with the same number of ones
//!
//! Patterns of `n` bits are ordered by their number of ones first and by
//! numeric value second, so every integer in `0..2^n` names exactly one
//! pattern and the patterns with `k` ones occupy a contiguous block of
//! `C(n, k)` ranks.
//!
//! # Basic usage
//!
//! ```
//! use bankers::{from, next_str, to};
//!
//! // 0000 0001 0010 0100 1000 0011 0101 ...
//! assert_eq!(to(5u64, Some(4)).unwrap().to_string(), "0011");
//! assert_eq!(from("0101"), Ok(6));
//! assert_eq!(next_str("0011").unwrap().to_string(), "0101");
//! assert!(next_str("1100").is_err());
//! ```
//!
//! # About implementation
//!
//! Binomial coefficients up to `C(64, k)` come from a Pascal triangle built by
//! `build.rs`; larger rows are computed on demand. Ranking walks the pattern
//! once from the most significant bit, adding the size of every skipped block
//! of patterns. The successor operator is Gosper's hack [1] on the pattern word
//! and does not touch the binomial table.
//!
//! [1] Donald E. Knuth. The Art of Computer Programming, Volume 4A,
//! Combinatorial Algorithms, Part 1. Section 7.1.3.

pub mod binom;
mod codec;
mod error;
mod pattern;
mod sequence;
mod successor;
mod tables;

pub use crate::codec::{from, to, Codec, Ordinal};
pub use crate::error::{Error, Result};
pub use crate::pattern::{BitPattern, MAX_LEN};
pub use crate::sequence::Sequence;
pub use crate::successor::{next, next_str, succ};

/// Version of the ranking scheme, taken from the crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
