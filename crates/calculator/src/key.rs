use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// Binary operator held while waiting for the right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Operator::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// `lhs <op> rhs`. Division fails only for a right operand equal to zero.
    pub fn apply(&self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide if rhs == 0.0 => Err(CalcError::DivideByZero),
            Operator::Divide => Ok(lhs / rhs),
        }
    }
}

impl core::fmt::Display for Operator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One calculator button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Digit(u8),
    Operator(Operator),
    Equals,
    Clear,
}

impl Key {
    /// Map a keypad character (`0-9 + - * / = C`) to its key.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Key::Digit(d as u8)),
            '=' => Some(Key::Equals),
            'C' | 'c' => Some(Key::Clear),
            other => Operator::from_symbol(other).map(Key::Operator),
        }
    }
}
