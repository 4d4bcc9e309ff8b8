use std::iter::FusedIterator;

use crate::codec::Codec;
use crate::error::Result;
use crate::pattern::BitPattern;
use crate::successor::succ;

/// Every pattern of one length, in rank order.
///
/// Population counts never decrease along the sequence, and every pattern
/// appears exactly once.
///
/// ```
/// use bankers::Sequence;
///
/// let all: Vec<String> = Sequence::new(3).unwrap().map(|p| p.to_string()).collect();
/// assert_eq!(all, ["000", "001", "010", "100", "011", "101", "110", "111"]);
/// ```
#[derive(Debug, Clone)]
pub struct Sequence {
    next: Option<BitPattern>,
    /// Patterns left to yield; `2^64` does not fit a `u64`.
    remaining: u128,
}

impl Sequence {
    pub(crate) fn starting_at(start: BitPattern, rank: u64) -> Self {
        Sequence {
            next: Some(start),
            remaining: (1u128 << start.len()) - rank as u128,
        }
    }

    /// Starts at the all-zero pattern of length `len`.
    ///
    /// # Errors
    /// [`Error::LengthTooLarge`](crate::Error::LengthTooLarge) if `len` exceeds 64.
    pub fn new(len: u32) -> Result<Self> {
        Ok(Self::starting_at(BitPattern::zeros(len)?, 0))
    }

    /// Starts at the pattern of length `len` with the given rank.
    ///
    /// # Errors
    /// As [`Codec::new`] and [`Codec::unrank`].
    pub fn from_rank(len: u32, rank: u64) -> Result<Self> {
        let start = Codec::new(len)?.unrank(rank)?;
        Ok(Self::starting_at(start, rank))
    }
}

impl Iterator for Sequence {
    type Item = BitPattern;

    fn next(&mut self) -> Option<BitPattern> {
        let current = self.next.take()?;
        self.next = succ(&current).ok();
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Sequence {}
