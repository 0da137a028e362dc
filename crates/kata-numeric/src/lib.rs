//! Integer exercises with explicit overflow handling
//!
//! All routines work on 32-bit values and report results that would leave
//! the `i32` range instead of wrapping.

// Digit reversal with the zero sentinel and its checked counterpart
pub mod reverse;

// Division without the division operator
pub mod divide;

// Slice exercises: products, stock profit, pair sums
pub mod arrays;

pub use arrays::{max_profit, product_except_self, two_sum};
pub use divide::divide;
pub use reverse::{checked_reverse, reverse};
