//! Error types for ranking, unranking and stepping bit patterns.

use thiserror::Error;

/// Error variants for binomial and pattern operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A negative binomial argument or a malformed pattern.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Neither an explicit length nor the input itself gave a pattern length.
    #[error("unable to determine pattern length")]
    MissingLength,

    /// The pattern is already the greatest of its length and population count.
    #[error("pattern has no successor")]
    NoSuccessor,

    /// Patterns are stored in a single 64-bit word.
    #[error("pattern length {0} exceeds 64 bits")]
    LengthTooLarge(u32),

    /// A codec bound to one length was handed a pattern of another.
    #[error("expected a pattern of length {expected}, got {actual}")]
    LengthMismatch {
        /// Length of the codec.
        expected: u32,
        /// Length of the offending pattern.
        actual: u32,
    },

    /// There are only `2^length` patterns of a given length.
    #[error("rank {rank} is out of range for patterns of length {length}")]
    RankOutOfRange {
        /// Requested rank.
        rank: u64,
        /// Pattern length.
        length: u32,
    },

    /// The binomial value (or sum of values) does not fit in 64 bits.
    #[error("{n} choose {k} overflows 64 bits")]
    Overflow {
        /// Row of Pascal's triangle.
        n: u32,
        /// Column of Pascal's triangle.
        k: u32,
    },
}

/// A specialized Result type for combinatorial number system operations.
pub type Result<T> = std::result::Result<T, Error>;
