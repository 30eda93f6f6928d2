//! Calculator error model.

use thiserror::Error;

pub type CalcResult<T> = Result<T, CalcError>;

/// Recoverable calculator failures. None of them reset the pending operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The display text is not a number (empty, or an earlier error indicator).
    #[error("cannot parse {0:?} as a number")]
    Parse(String),

    #[error("division by zero")]
    DivideByZero,

    /// A digit key outside 0..=9.
    #[error("invalid digit: {0}")]
    InvalidDigit(u8),
}

impl CalcError {
    /// Text the display shows for this failure.
    pub fn indicator(&self) -> &'static str {
        match self {
            CalcError::DivideByZero => "Math Error",
            CalcError::Parse(_) | CalcError::InvalidDigit(_) => "Error",
        }
    }
}
