use std::ops::RangeInclusive;

use log::{debug, trace};
use roxygen::{arguments_section, roxygen};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::binom::{pascal, sum};
use crate::error::{Error, Result};
use crate::pattern::{binary_len, BitPattern, MAX_LEN};
use crate::sequence::Sequence;

/// Something that names a pattern: either its rank, or a binary string
/// whose integer value is the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordinal<'a> {
    /// A rank.
    Index(u64),
    /// A string of `0`s and `1`s, read as an unsigned binary number.
    Binary(&'a str),
}

impl From<u64> for Ordinal<'_> {
    fn from(value: u64) -> Self {
        Ordinal::Index(value)
    }
}

impl<'a> From<&'a str> for Ordinal<'a> {
    fn from(value: &'a str) -> Self {
        Ordinal::Binary(value)
    }
}

fn check_len(len: u32) -> Result<()> {
    if len > MAX_LEN {
        return Err(Error::LengthTooLarge(len));
    }
    Ok(())
}

fn check_rank(rank: u64, len: u32) -> Result<()> {
    if len < MAX_LEN && rank >> len != 0 {
        return Err(Error::RankOutOfRange { rank, length: len });
    }
    Ok(())
}

/// Reads a binary string as an unsigned number. Leading zeros are free, so
/// the string may be longer than 64 digits.
fn binary_value(s: &str) -> Result<u64> {
    binary_len(s)?;
    let digits = s.trim_start_matches('0');
    if digits.len() > MAX_LEN as usize {
        return Err(Error::InvalidArgument(format!(
            "{:?} does not fit in {} bits",
            s, MAX_LEN
        )));
    }
    Ok(digits.bytes().fold(0, |acc, b| (acc << 1) | (b - b'0') as u64))
}

/// Lay out `ones` set bits in `len` positions so that the result is the
/// `remainder`-th such pattern in ascending order.
fn fill(len: u32, mut ones: u32, mut remainder: u64) -> u64 {
    let mut bits = 0;
    for i in 0..len {
        if ones == 0 {
            break;
        }
        // Patterns that keep a 0 here come first.
        let skipped = pascal(len - i - 1, ones);
        if remainder >= skipped {
            remainder -= skipped;
            bits |= 1 << (len - 1 - i);
            ones -= 1;
        }
        trace!("position {}: remainder {}, {} ones left", i, remainder, ones);
    }
    debug_assert_eq!(remainder, 0);
    bits
}

/// Rank of `pattern` among all patterns of its length.
fn rank_of(pattern: &BitPattern) -> u64 {
    let n = pattern.len();
    let k = pattern.count_ones();

    let mut rank = 0;
    let mut c = 0;
    for (i, bit) in (0..n).zip(pattern.iter()) {
        if c == k {
            break;
        }
        if bit {
            // One more class below ours, plus the patterns that keep a 0 here.
            rank += pascal(n, c) + pascal(n - i - 1, k - c);
            c += 1;
        }
    }
    debug!("from {} to {}", pattern, rank);
    rank
}

#[roxygen]
/// Unrank an integer into the bit pattern at that position of the sequence.
///
/// ```
/// use bankers::to;
///
/// assert_eq!(to(0u64, Some(4)).unwrap().to_string(), "0000");
/// assert_eq!(to(5u64, Some(4)).unwrap().to_string(), "0011");
/// assert_eq!(to(6u64, Some(4)).unwrap().to_string(), "0101");
/// // A binary string stands for its integer value and supplies the length.
/// assert_eq!(to("0110", None).unwrap().to_string(), "0101");
/// ```
#[arguments_section]
/// # Errors
/// * [`Error::MissingLength`] if no non-zero length is given or implied.
/// * [`Error::InvalidArgument`] if a binary string has other characters, or
///   more than 64 digits after its leading zeros.
/// * [`Error::LengthTooLarge`] if the length exceeds 64.
/// * [`Error::RankOutOfRange`] if the value is not below `2^length`.
pub fn to<'a>(
    /// A rank, or a binary string read as one.
    value: impl Into<Ordinal<'a>>,
    /// Pattern length; defaults to the length of a binary string.
    length: Option<u32>,
) -> Result<BitPattern> {
    let (rank, length) = match value.into() {
        Ordinal::Index(rank) => (rank, length),
        Ordinal::Binary(s) => (binary_value(s)?, length.or(Some(binary_len(s)?))),
    };
    let n = match length {
        None | Some(0) => return Err(Error::MissingLength),
        Some(n) => n,
    };
    check_len(n)?;
    check_rank(rank, n)?;

    // Peel off whole population classes.
    let mut remainder = rank;
    let mut k = 0;
    while k < n && pascal(n, k) <= remainder {
        remainder -= pascal(n, k);
        k += 1;
    }

    let pattern = BitPattern::from_raw(fill(n, k, remainder), n);
    debug!("to {} from {}", pattern, rank);
    Ok(pattern)
}

/// Rank a binary string.
///
/// ```
/// assert_eq!(bankers::from("0000"), Ok(0));
/// assert_eq!(bankers::from("1000"), Ok(4));
/// assert_eq!(bankers::from("0101"), Ok(6));
/// assert_eq!(bankers::from("1111"), Ok(15));
/// ```
///
/// # Errors
/// [`Error::InvalidArgument`] if the string has characters other than `0` and `1`,
/// [`Error::LengthTooLarge`] if it is longer than 64.
pub fn from(pattern: &str) -> Result<u64> {
    let pattern: BitPattern = pattern.parse()?;
    Ok(rank_of(&pattern))
}

/// The combinatorial number system for patterns of one length.
///
/// Ranks run over `0..2^len`. Patterns with fewer ones always rank lower;
/// patterns with the same number of ones rank in ascending numeric order.
///
/// ```
/// use bankers::Codec;
///
/// let codec = Codec::new(4).unwrap();
/// let p = codec.unrank(9).unwrap();
/// assert_eq!(p.to_string(), "1010");
/// assert_eq!(codec.rank(&p), Ok(9));
/// assert_eq!(codec.class_range(2), 5..=10);
/// ```
///
/// Serializes as its length alone; the offsets are rebuilt on the way back in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u32", into = "u32")
)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct Codec {
    /// Length of every pattern handled.
    len: u32,
    /// `offsets[k]` is the rank of the first pattern with `k` ones.
    offsets: Vec<u64>,
}

impl Codec {
    /// Constructs a codec for patterns of `len` bits.
    ///
    /// # Errors
    /// [`Error::MissingLength`] for `len == 0`, [`Error::LengthTooLarge`] above 64.
    pub fn new(len: u32) -> Result<Self> {
        if len == 0 {
            return Err(Error::MissingLength);
        }
        check_len(len)?;

        let mut offsets = Vec::with_capacity(len as usize + 1);
        offsets.push(0);
        for k in 1..=len {
            offsets.push(sum(len, k - 1)?);
        }
        Ok(Codec { len, offsets })
    }

    /// Returns the pattern length.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Ranks `pattern`.
    ///
    /// # Errors
    /// [`Error::LengthMismatch`] if `pattern` is not `len` bits long.
    pub fn rank(&self, pattern: &BitPattern) -> Result<u64> {
        if pattern.len() != self.len {
            return Err(Error::LengthMismatch {
                expected: self.len,
                actual: pattern.len(),
            });
        }
        let rank = rank_of(pattern);
        debug_assert!(self.class_range(pattern.count_ones()).contains(&rank));
        Ok(rank)
    }

    /// Unranks `rank`.
    ///
    /// # Errors
    /// [`Error::RankOutOfRange`] if `rank` is not below `2^len`.
    pub fn unrank(&self, rank: u64) -> Result<BitPattern> {
        check_rank(rank, self.len)?;
        let k = self.population_of(rank);
        let bits = fill(self.len, k, rank - self.offsets[k as usize]);
        Ok(BitPattern::from_raw(bits, self.len))
    }

    /// Population count of the pattern at `rank`.
    pub fn population_of(&self, rank: u64) -> u32 {
        (self.offsets.partition_point(|&offset| offset <= rank) - 1) as u32
    }

    /// Ranks held by patterns with exactly `k` ones.
    ///
    /// # Panics
    /// Panics if `k` exceeds the pattern length.
    pub fn class_range(&self, k: u32) -> RangeInclusive<u64> {
        assert!(k <= self.len, "{} ones do not fit in {} bits", k, self.len);
        let start = self.offsets[k as usize];
        start..=start + (pascal(self.len, k) - 1)
    }

    /// Iterates every pattern of this length in rank order.
    pub fn sequence(&self) -> Sequence {
        Sequence::starting_at(BitPattern::from_raw(0, self.len), 0)
    }
}

impl TryFrom<u32> for Codec {
    type Error = Error;

    fn try_from(len: u32) -> Result<Self> {
        Codec::new(len)
    }
}

impl From<Codec> for u32 {
    fn from(codec: Codec) -> Self {
        codec.len
    }
}
