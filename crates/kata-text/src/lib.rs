//! String exercises: reversal, substring search and palindromes
//!
//! Offsets are byte offsets into the original `&str`.

use tracing::trace;

/// Reverse a slice in place by swapping from both ends toward the middle
pub fn reverse_in_place<T>(items: &mut [T]) {
    if items.is_empty() {
        return;
    }

    let mut low = 0;
    let mut high = items.len() - 1;
    while low < high {
        items.swap(low, high);
        low += 1;
        high -= 1;
    }
}

/// Reverse the characters of a string
///
/// Works on Unicode scalar values, so multi-byte characters stay intact.
#[must_use]
pub fn reverse_chars(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    reverse_in_place(&mut chars);
    chars.into_iter().collect()
}

/// Byte offset of the first occurrence of `needle` in `haystack`
///
/// An empty needle matches at offset 0.
#[must_use]
pub fn find_substring(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    let hay = haystack.as_bytes();
    let pattern = needle.as_bytes();
    if pattern.len() > hay.len() {
        return None;
    }

    let found = (0..=hay.len() - pattern.len()).find(|&i| &hay[i..i + pattern.len()] == pattern);
    trace!(?found, needle, "substring search finished");
    found
}

/// Check whether `s` reads the same both ways
///
/// Only ASCII letters and digits are compared, ignoring case. Everything
/// else, including non-ASCII characters, is skipped.
#[must_use]
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<u8> = s
        .bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(|b| b.to_ascii_lowercase())
        .collect();

    if cleaned.is_empty() {
        return true;
    }

    let mut left = 0;
    let mut right = cleaned.len() - 1;
    while left < right {
        if cleaned[left] != cleaned[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }

    true
}
