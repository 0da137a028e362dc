//! Shared error type for the kata exercises
//!
//! Every failure carries a stable `ERR_*` code in its rendered message so the
//! CLI and tests can match on it without depending on the wording.

/// Arithmetic operation that can leave the `i32` range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Reverse,
    Product,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Reverse => "reverse",
            Self::Product => "product",
        };
        f.write_str(name)
    }
}

/// Error types for the kata exercises
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KataError {
    #[error("kata: ERR_OVERFLOW: {operation}({input}) does not fit in a 32-bit signed integer")]
    Overflow { operation: Operation, input: String },

    #[error("kata: ERR_DIV_ZERO: cannot divide {dividend} by zero")]
    DivisionByZero { dividend: i32 },

    #[error("kata: ERR_CAR_TYPE: {code} is not a car type (expected 1, 2 or 3)")]
    InvalidCarType { code: i64 },

    #[error("kata: ERR_INPUT: {message}")]
    InvalidInput { message: String },
}

impl KataError {
    #[must_use]
    pub fn overflow(operation: Operation, input: impl std::fmt::Display) -> Self {
        Self::Overflow {
            operation,
            input: input.to_string(),
        }
    }

    #[must_use]
    pub const fn division_by_zero(dividend: i32) -> Self {
        Self::DivisionByZero { dividend }
    }

    #[must_use]
    pub const fn invalid_car_type(code: i64) -> Self {
        Self::InvalidCarType { code }
    }

    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Overflow { .. } => "ERR_OVERFLOW",
            Self::DivisionByZero { .. } => "ERR_DIV_ZERO",
            Self::InvalidCarType { .. } => "ERR_CAR_TYPE",
            Self::InvalidInput { .. } => "ERR_INPUT",
        }
    }
}
