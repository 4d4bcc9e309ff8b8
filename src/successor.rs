//! Stepping through patterns without ranking them.
//!
//! [`next`] walks one population class in ascending order using Gosper's
//! hack: isolate the lowest set bit, carry it into the next zero above the
//! lowest run of ones, then pack the rest of that run at the bottom.
//! [`succ`] additionally crosses into the next class, which yields the whole
//! sequence in rank order.

use log::trace;

use crate::error::{Error, Result};
use crate::pattern::{window, BitPattern};

/// The next pattern with the same length and population count.
///
/// ```
/// use bankers::{next, BitPattern};
///
/// let p: BitPattern = "0011".parse().unwrap();
/// assert_eq!(next(&p).unwrap().to_string(), "0101");
/// ```
///
/// # Errors
/// [`Error::NoSuccessor`] if `pattern` is the greatest of its class,
/// which includes the all-zero pattern.
pub fn next(pattern: &BitPattern) -> Result<BitPattern> {
    let len = pattern.len();
    let b = pattern.bits();
    if b == 0 {
        return Err(Error::NoSuccessor);
    }

    let lowest = b & b.wrapping_neg();
    let carried = b.checked_add(lowest).ok_or(Error::NoSuccessor)?;
    if carried & !window(len) != 0 {
        return Err(Error::NoSuccessor);
    }
    // Ones that rippled through the carry, minus the one that moved up.
    let packed = ((b ^ carried) >> 2) / lowest;
    let stepped = carried | packed;
    trace!("next {:0w$b} -> {:0w$b}", b, stepped, w = len as usize);

    Ok(BitPattern::from_raw(stepped, len))
}

/// [`next`] on a binary string.
///
/// # Errors
/// [`Error::InvalidArgument`] on malformed input, otherwise as [`next`].
pub fn next_str(pattern: &str) -> Result<BitPattern> {
    next(&pattern.parse()?)
}

/// The pattern ranked right after `pattern`.
///
/// Within a class this is [`next`]; the greatest pattern of a class is
/// followed by the least pattern with one more set bit.
///
/// ```
/// use bankers::{succ, BitPattern};
///
/// let p: BitPattern = "1100".parse().unwrap();
/// assert_eq!(succ(&p).unwrap().to_string(), "0111");
/// ```
///
/// # Errors
/// [`Error::NoSuccessor`] for the all-one pattern.
pub fn succ(pattern: &BitPattern) -> Result<BitPattern> {
    match next(pattern) {
        Err(Error::NoSuccessor) => {
            let k = pattern.count_ones();
            if k == pattern.len() {
                return Err(Error::NoSuccessor);
            }
            Ok(BitPattern::from_raw(window(k + 1), pattern.len()))
        }
        other => other,
    }
}
