//! Whitespace-separated token reading from stdin or a file

use kata_core::KataError;
use std::fmt::Display;
use std::io::BufRead;
use std::str::FromStr;

/// Reads input one whitespace-separated token at a time, across line breaks
pub struct TokenReader<R> {
    reader: R,
    line: String,
    cursor: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            cursor: 0,
        }
    }

    /// Next token, or `None` at end of input
    ///
    /// # Errors
    ///
    /// Returns `KataError::InvalidInput` if the underlying reader fails
    pub fn next_token(&mut self) -> Result<Option<String>, KataError> {
        loop {
            let rest = &self.line[self.cursor..];
            if let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
                let token_start = self.cursor + start;
                let len = self.line[token_start..]
                    .find(char::is_whitespace)
                    .unwrap_or(self.line.len() - token_start);
                self.cursor = token_start + len;
                return Ok(Some(self.line[token_start..self.cursor].to_string()));
            }
            if self.fill()? == 0 {
                return Ok(None);
            }
        }
    }

    /// Parse the next token as `T`; `what` names the value in error messages
    ///
    /// # Errors
    ///
    /// Returns `KataError::InvalidInput` if input ends early or the token does not parse
    pub fn next_value<T>(&mut self, what: &str) -> Result<T, KataError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let token = self.next_token()?.ok_or_else(|| {
            KataError::invalid_input(format!("expected {what}, found end of input"))
        })?;
        parse_value(&token, what)
    }

    /// Rest of the current line, or the next full line if nothing is left on it
    ///
    /// Whitespace inside the line is kept as read.
    ///
    /// # Errors
    ///
    /// Returns `KataError::InvalidInput` if the underlying reader fails
    pub fn read_line(&mut self) -> Result<String, KataError> {
        if self.line[self.cursor..].trim().is_empty() {
            self.fill()?;
        }

        let rest = self.line[self.cursor..]
            .trim_start_matches([' ', '\t'])
            .trim_end_matches(['\r', '\n'])
            .to_string();
        self.cursor = self.line.len();
        Ok(rest)
    }

    /// Replace the buffered line with the next one from the reader
    fn fill(&mut self) -> Result<usize, KataError> {
        self.line.clear();
        self.cursor = 0;
        self.reader
            .read_line(&mut self.line)
            .map_err(|e| KataError::invalid_input(format!("failed to read input: {e}")))
    }
}

/// Parse a single token, naming it in the error
///
/// # Errors
///
/// Returns `KataError::InvalidInput` if `token` does not parse as `T`
pub fn parse_value<T>(token: &str, what: &str) -> Result<T, KataError>
where
    T: FromStr,
    T::Err: Display,
{
    token
        .parse()
        .map_err(|e| KataError::invalid_input(format!("invalid {what} '{token}': {e}")))
}
