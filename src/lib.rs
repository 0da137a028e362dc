//! Kata - bounded integer reversal and companion exercises
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`numeric`]: digit reversal, division, slice products, stock profit, pair sums
//! - [`text`]: string reversal, substring search, palindromes
//! - [`parking`]: three-category parking lot tracker
//!
//! ```
//! assert_eq!(kata::reverse(-123), -321);
//! assert_eq!(kata::reverse(1_534_236_469), 0);
//! assert!(kata::checked_reverse(1_534_236_469).is_err());
//! ```

pub use kata_core::{KataError, Operation};
pub use kata_numeric as numeric;
pub use kata_numeric::{checked_reverse, reverse};
pub use kata_parking as parking;
pub use kata_text as text;
