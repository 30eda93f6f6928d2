use tracing::{debug, warn};

use crate::error::{CalcError, CalcResult};
use crate::key::{Key, Operator};

/// Coarse state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcState {
    /// No operator captured; the display holds a number being typed or a result.
    Idle,
    /// An operator and its left operand are captured; the display holds the right operand.
    OperatorPending(Operator),
}

/// Accumulator calculator.
///
/// - `pending_operand`: left-hand value, also the last result after `=`.
/// - `pending_operator`: at most one; choosing another overwrites it.
/// - `display`: text being composed, or the last result / error indicator.
///
/// Error indicators are written to the display like any other text, so digits typed
/// after an error keep failing to parse until [`Calculator::clear`] is called.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    pending_operand: f64,
    pending_operator: Option<Operator>,
    display: String,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            pending_operand: 0.0,
            pending_operator: None,
            display: String::new(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending_operand(&self) -> f64 {
        self.pending_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn state(&self) -> CalcState {
        match self.pending_operator {
            Some(op) => CalcState::OperatorPending(op),
            None => CalcState::Idle,
        }
    }

    /// Append a digit to the display (plain text concatenation).
    pub fn input_digit(&mut self, digit: u8) -> CalcResult<()> {
        if digit > 9 {
            return Err(CalcError::InvalidDigit(digit));
        }
        self.display.push(char::from(b'0' + digit));
        Ok(())
    }

    /// Empty the display. The pending operand and operator are kept.
    pub fn clear(&mut self) {
        self.display.clear();
    }

    /// Capture the display as the left operand and hold `op`.
    ///
    /// Any operator already pending is dropped without being evaluated.
    pub fn choose_operator(&mut self, op: Operator) -> CalcResult<()> {
        let lhs = self.read_display()?;
        if let Some(previous) = self.pending_operator {
            debug!(%previous, replacement = %op, "pending operator replaced");
        }
        self.pending_operand = lhs;
        self.pending_operator = Some(op);
        self.display.clear();
        Ok(())
    }

    /// Apply the pending operator to the pending operand and the display value.
    ///
    /// On success the result becomes the new pending operand and is shown on the
    /// display, and the engine returns to [`CalcState::Idle`]. With no operator
    /// pending the pending operand (the last result, 0 initially) is returned as is.
    /// On failure the pending operand and operator are left untouched and the display
    /// shows the error indicator.
    pub fn evaluate(&mut self) -> CalcResult<f64> {
        let rhs = self.read_display()?;
        let result = match self.pending_operator {
            Some(op) => op.apply(self.pending_operand, rhs),
            None => Ok(self.pending_operand),
        };

        match result {
            Ok(value) => {
                debug!(lhs = self.pending_operand, rhs, result = value, "evaluated");
                self.pending_operand = value;
                self.pending_operator = None;
                self.display = value.to_string();
                Ok(value)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Dispatch one key press.
    pub fn press(&mut self, key: Key) -> CalcResult<()> {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Operator(op) => self.choose_operator(op),
            Key::Equals => self.evaluate().map(|_| ()),
            Key::Clear => {
                self.clear();
                Ok(())
            }
        }
    }

    fn read_display(&mut self) -> CalcResult<f64> {
        match self.display.parse::<f64>() {
            Ok(value) => Ok(value),
            Err(_) => {
                let err = CalcError::Parse(self.display.clone());
                Err(self.fail(err))
            }
        }
    }

    fn fail(&mut self, err: CalcError) -> CalcError {
        warn!(error = %err, "calculator error");
        self.display = err.indicator().to_string();
        err
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
