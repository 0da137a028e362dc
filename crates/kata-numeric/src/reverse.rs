//! Base-10 digit reversal bounded to `i32`

use kata_core::{KataError, Operation};
use tracing::debug;

/// Reverse the decimal digits of `n`, keeping its sign
///
/// Returns `0` when the reversed value does not fit in an `i32`. Use
/// [`checked_reverse`] to tell an overflow apart from a zero input.
#[must_use]
pub fn reverse(n: i32) -> i32 {
    checked_reverse(n).unwrap_or(0)
}

/// Reverse the decimal digits of `n`, keeping its sign
///
/// # Errors
///
/// Returns `KataError::Overflow` if the reversed value is outside the `i32` range
pub fn checked_reverse(n: i32) -> Result<i32, KataError> {
    let mut remaining = n;
    let mut rev: i32 = 0;

    while remaining != 0 {
        // `%` and `/` truncate toward zero, so digits of a negative input stay negative
        let rem = remaining % 10;
        remaining /= 10;

        // 7 and -8 are the last digits of i32::MAX and i32::MIN
        if rev > i32::MAX / 10 || (rev == i32::MAX / 10 && rem > 7) {
            debug!(input = n, partial = rev, "reversal exceeds i32::MAX");
            return Err(KataError::overflow(Operation::Reverse, n));
        }
        if rev < i32::MIN / 10 || (rev == i32::MIN / 10 && rem < -8) {
            debug!(input = n, partial = rev, "reversal exceeds i32::MIN");
            return Err(KataError::overflow(Operation::Reverse, n));
        }

        rev = rev * 10 + rem;
    }

    Ok(rev)
}
