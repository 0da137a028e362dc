//! Integration tests for the sentinel and checked reversal contracts

use kata::{KataError, Operation, checked_reverse, reverse};
use proptest::prelude::*;

#[test]
fn test_documented_values() {
    assert_eq!(reverse(0), 0);
    assert_eq!(reverse(123), 321);
    assert_eq!(reverse(-123), -321);
    assert_eq!(reverse(1_534_236_469), 0);
    assert_eq!(reverse(120), 21);
    assert_eq!(reverse(-2_147_483_648), 0);
}

#[test]
fn test_checked_distinguishes_zero_from_overflow() {
    assert_eq!(checked_reverse(0), Ok(0));

    let error = checked_reverse(1_534_236_469).unwrap_err();
    assert_eq!(error.code(), "ERR_OVERFLOW");
    assert_eq!(
        error,
        KataError::Overflow {
            operation: Operation::Reverse,
            input: "1534236469".to_string(),
        }
    );
}

#[test]
fn test_reversal_not_self_inverse_with_trailing_zeros() {
    assert_eq!(reverse(1200), 21);
    assert_eq!(reverse(reverse(1200)), 12);
    assert_eq!(reverse(reverse(1201)), 1201);
}

proptest! {
    #[test]
    fn prop_sentinel_agrees_with_checked(n in any::<i32>()) {
        prop_assert_eq!(reverse(n), checked_reverse(n).unwrap_or(0));
    }

    #[test]
    fn prop_double_reverse_restores_without_trailing_zero(n in -99_999_i32..99_999) {
        prop_assume!(n % 10 != 0);
        prop_assert_eq!(reverse(reverse(n)), n);
    }
}
