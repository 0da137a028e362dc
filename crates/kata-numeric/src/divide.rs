//! Truncating division by binary search over the quotient

use kata_core::KataError;
use tracing::{debug, trace};

/// Divide `dividend` by `divisor`, truncating toward zero
///
/// The quotient is found by binary search on its magnitude, using only
/// multiplication against the operands. `i32::MIN / -1` saturates to
/// `i32::MAX`.
///
/// # Errors
///
/// Returns `KataError::DivisionByZero` if `divisor` is zero
pub fn divide(dividend: i32, divisor: i32) -> Result<i32, KataError> {
    if divisor == 0 {
        return Err(KataError::division_by_zero(dividend));
    }
    if dividend == i32::MIN && divisor == -1 {
        debug!(dividend, divisor, "quotient saturated to i32::MAX");
        return Ok(i32::MAX);
    }

    let a = i64::from(dividend).abs();
    let b = i64::from(divisor).abs();

    let mut low = 0_i64;
    let mut high = a;
    let mut quotient = 0_i64;
    while low <= high {
        let mid = low + (high - low) / 2;
        if mid * b <= a {
            quotient = mid;
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }
    trace!(dividend, divisor, quotient, "magnitude found");

    let signed = if (dividend < 0) ^ (divisor < 0) {
        -quotient
    } else {
        quotient
    };

    // |quotient| <= |dividend|, and +2^31 only arises from MIN / -1 handled above
    Ok(signed as i32)
}
