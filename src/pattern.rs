use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::error::{Error, Result};

/// Longest pattern that fits in one word.
pub const MAX_LEN: u32 = u64::BITS;

/// Mask of the low `len` bits.
#[inline(always)]
pub(crate) const fn window(len: u32) -> u64 {
    if len == 0 {
        0
    } else {
        u64::MAX >> (u64::BITS - len)
    }
}

/// Number of digits in `s`, after checking that every one is `0` or `1`.
pub(crate) fn binary_len(s: &str) -> Result<u32> {
    if let Some(c) = s.chars().find(|c| !matches!(c, '0' | '1')) {
        return Err(Error::InvalidArgument(format!(
            "{:?} is not a binary digit in {:?}",
            c, s
        )));
    }
    u32::try_from(s.len()).map_err(|_| Error::LengthTooLarge(u32::MAX))
}

/// A fixed-length sequence of bits, position 0 being the most significant.
///
/// The bits live in the low `len` bits of a single word, so the numeric value
/// of the word is the pattern read as a binary number:
///
/// ```
/// let p: bankers::BitPattern = "0101".parse().unwrap();
/// assert_eq!(p.len(), 4);
/// assert_eq!(p.bits(), 5);
/// assert_eq!(p.count_ones(), 2);
/// assert!(p.get(1));
/// assert_eq!(p.to_string(), "0101");
/// ```
///
/// Patterns order by length first and numeric value second, which within one
/// length is the lexicographic order of their binary strings.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct BitPattern {
    len: u32,
    bits: u64,
}

impl BitPattern {
    /// Constructs a pattern of `len` bits from the low bits of `bits`.
    ///
    /// # Errors
    /// * [`Error::LengthTooLarge`] if `len` exceeds 64.
    /// * [`Error::InvalidArgument`] if `bits` has ones above position `len`.
    pub fn new(bits: u64, len: u32) -> Result<Self> {
        if len > MAX_LEN {
            return Err(Error::LengthTooLarge(len));
        }
        if bits & !window(len) != 0 {
            return Err(Error::InvalidArgument(format!(
                "{:#b} does not fit in {} bits",
                bits, len
            )));
        }
        Ok(Self::from_raw(bits, len))
    }

    /// The all-zero pattern of length `len`.
    pub fn zeros(len: u32) -> Result<Self> {
        Self::new(0, len)
    }

    /// The all-one pattern of length `len`.
    pub fn ones(len: u32) -> Result<Self> {
        if len > MAX_LEN {
            return Err(Error::LengthTooLarge(len));
        }
        Ok(Self::from_raw(window(len), len))
    }

    #[inline(always)]
    pub(crate) const fn from_raw(bits: u64, len: u32) -> Self {
        debug_assert!(len <= MAX_LEN);
        BitPattern { len, bits }
    }

    /// Returns the number of bits.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns true for the zero-length pattern.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the pattern as an integer, position 0 most significant.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Population count.
    pub fn count_ones(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Number of unset bits.
    pub fn count_zeros(&self) -> u32 {
        self.len - self.count_ones()
    }

    /// Gets the bit at position `i`, counted from the most significant end.
    ///
    /// # Panics
    /// Panics if `i` is not below the pattern length.
    pub fn get(&self, i: u32) -> bool {
        assert!(i < self.len, "position {} out of {} bits", i, self.len);
        (self.bits >> (self.len - 1 - i)) & 1 == 1
    }

    /// Iterates the bits from position 0.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }
}

impl FromStr for BitPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let len = binary_len(s)?;
        if len > MAX_LEN {
            return Err(Error::LengthTooLarge(len));
        }
        let bits = s.bytes().fold(0, |acc, b| (acc << 1) | (b - b'0') as u64);
        Ok(Self::from_raw(bits, len))
    }
}

impl TryFrom<&[bool]> for BitPattern {
    type Error = Error;

    fn try_from(value: &[bool]) -> Result<Self> {
        let len = u32::try_from(value.len()).map_err(|_| Error::LengthTooLarge(u32::MAX))?;
        if len > MAX_LEN {
            return Err(Error::LengthTooLarge(len));
        }
        let bits = value.iter().fold(0, |acc, &b| (acc << 1) | b as u64);
        Ok(Self::from_raw(bits, len))
    }
}

impl TryFrom<String> for BitPattern {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<BitPattern> for String {
    fn from(value: BitPattern) -> Self {
        value.to_string()
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.len == 0 {
            return Ok(());
        }
        write!(f, "{:0w$b}", self.bits, w = self.len as usize)
    }
}

impl fmt::Debug for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BitPattern({:?})", self.to_string())
    }
}
