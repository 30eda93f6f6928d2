//! Four-function calculator engine.
//!
//! A single-pending-operator accumulator: the left operand and operator are captured
//! when an operator key is pressed, and the result of `=` becomes the next left operand.
//! Pure state machine; rendering the display is up to the caller.

pub mod engine;
pub mod error;
pub mod key;

pub use engine::{CalcState, Calculator};
pub use error::{CalcError, CalcResult};
pub use key::{Key, Operator};
