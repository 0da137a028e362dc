//! Slice exercises over 32-bit integers

use kata_core::{KataError, Operation};
use std::collections::HashMap;
use tracing::trace;

/// Product of every element except the one at each index
///
/// Uses a prefix pass and a suffix pass, never dividing.
///
/// # Errors
///
/// Returns `KataError::Overflow` if a prefix, suffix or final product leaves the `i32` range
pub fn product_except_self(nums: &[i32]) -> Result<Vec<i32>, KataError> {
    let overflow = || KataError::overflow(Operation::Product, format!("{nums:?}"));

    let mut result = vec![1_i32; nums.len()];

    let mut prefix = 1_i32;
    for i in 1..nums.len() {
        prefix = prefix.checked_mul(nums[i - 1]).ok_or_else(overflow)?;
        result[i] = prefix;
    }

    let mut suffix = 1_i32;
    for i in (0..nums.len().saturating_sub(1)).rev() {
        suffix = suffix.checked_mul(nums[i + 1]).ok_or_else(overflow)?;
        result[i] = result[i].checked_mul(suffix).ok_or_else(overflow)?;
    }

    Ok(result)
}

/// Best profit from one buy followed by one later sell
///
/// Returns `0` when prices never rise.
#[must_use]
pub fn max_profit(prices: &[u32]) -> u32 {
    let Some((&first, rest)) = prices.split_first() else {
        return 0;
    };

    let mut lowest = first;
    let mut best = 0;
    for &price in rest {
        best = best.max(price.saturating_sub(lowest));
        lowest = lowest.min(price);
    }
    best
}

/// Indices of two distinct elements summing to `target`
///
/// Returns the first pair found scanning left to right, as `(i, j)` with `i < j`.
#[must_use]
pub fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut seen: HashMap<i32, usize> = HashMap::with_capacity(nums.len());

    for (j, &value) in nums.iter().enumerate() {
        // Widened so `target - value` cannot overflow
        let complement = i64::from(target) - i64::from(value);
        if let Ok(complement) = i32::try_from(complement) {
            if let Some(&i) = seen.get(&complement) {
                trace!(i, j, target, "pair found");
                return Some((i, j));
            }
        }
        seen.insert(value, j);
    }

    None
}
