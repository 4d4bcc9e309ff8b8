//! Binomial coefficients `C(n, k)` and their prefix sums.
//!
//! Rows up to [`TABLE_WIDTH`] are read from a Pascal triangle generated at
//! build time. Wider rows fall back to the multiplicative formula, which is
//! exact at every step because each partial product is itself a binomial
//! coefficient.
//!
//! Row zero is degenerate: `choose(0, k) == 0` for every `k`, including
//! `choose(0, 0)`. Unranking never reads row zero for patterns of non-zero
//! length, so the convention is kept as is.

use log::trace;
use roxygen::{arguments_section, roxygen};

use crate::error::{Error, Result};
use crate::tables::{PASCAL, TABLE_WIDTH};

/// Table lookup used on the hot paths of the codec.
///
/// Callers guarantee `n <= TABLE_WIDTH`.
#[inline(always)]
pub(crate) fn pascal(n: u32, k: u32) -> u64 {
    debug_assert!(n <= TABLE_WIDTH);

    if n == 0 || k > n {
        return 0;
    }
    PASCAL[n as usize][k as usize]
}

#[roxygen]
/// Compute `n choose k`.
///
/// ```
/// assert_eq!(bankers::binom::choose(5, 2), Ok(10));
/// assert_eq!(bankers::binom::choose(0, 0), Ok(0));
/// ```
#[arguments_section]
/// # Errors
/// [`Error::Overflow`] when the coefficient does not fit in a `u64`,
/// which can only happen for `n > 64`.
pub fn choose(
    /// Row of Pascal's triangle.
    n: u32,
    /// Column of Pascal's triangle.
    k: u32,
) -> Result<u64> {
    if n <= TABLE_WIDTH {
        return Ok(pascal(n, k));
    }
    if k > n {
        return Ok(0);
    }
    if k == 0 || k == n {
        return Ok(1);
    }
    multiplicative(n, k)
}

/// `C(n, k)` for `0 < k < n` computed as a running product.
fn multiplicative(n: u32, k: u32) -> Result<u64> {
    let r = k.min(n - k);
    let base = (n - r) as u128;

    let mut result: u128 = 1;
    for i in 1..=r as u128 {
        // `result` is `C(n - r + i - 1, i - 1)` here, so the division is exact.
        result = result * (base + i) / i;
        if result > u64::MAX as u128 {
            return Err(Error::Overflow { n, k });
        }
    }
    trace!("{} choose {} = {}", n, k, result);
    Ok(result as u64)
}

#[roxygen]
/// Compute `Σ_{j=0..=k} C(n, j)`, the number of `n`-bit patterns with at most `k` ones.
///
/// `sum(n, 0)` is always `1`, even for the degenerate row zero.
#[arguments_section]
/// # Errors
/// [`Error::Overflow`] when the sum does not fit in a `u64` (e.g. `sum(64, 64)`).
pub fn sum(
    /// Row of Pascal's triangle.
    n: u32,
    /// Last column included in the sum.
    k: u32,
) -> Result<u64> {
    let mut total: u64 = 1;
    for j in 1..=k.min(n) {
        total = total
            .checked_add(choose(n, j)?)
            .ok_or(Error::Overflow { n, k })?;
    }
    Ok(total)
}

/// Narrow signed arguments to the unsigned domain of [`choose`] and [`sum`].
///
/// # Errors
/// [`Error::InvalidArgument`] when either value is negative or wider than `u32`.
pub fn checked_args(n: i64, k: i64) -> Result<(u32, u32)> {
    if n < 0 || k < 0 {
        return Err(Error::InvalidArgument(
            "cannot choose a negative value".to_string(),
        ));
    }
    let narrow = |v: i64| {
        u32::try_from(v).map_err(|_| Error::InvalidArgument(format!("{} is too large", v)))
    };
    Ok((narrow(n)?, narrow(k)?))
}
