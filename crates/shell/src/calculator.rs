//! Calculator keypad loop.

use std::io::{BufRead, Write};

use tracing::info;

use autoshop_calculator::{Calculator, Key};

use crate::config::ShellConfig;
use crate::console::Console;

const TITLE: &str = "Simple Calculator";
const HELP: &str = "Keys: 0-9 + - * / = C (several per line are fine), q to quit";

/// Interactive shell over a [`Calculator`].
///
/// Each input line is a run of key presses applied left to right; the display is
/// printed once the line has been consumed.
pub struct CalculatorSession<R, W> {
    calculator: Calculator,
    console: Console<R, W>,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> CalculatorSession<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            calculator: Calculator::new(),
            console: Console::new(input, output),
            config,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run until `q` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!("calculator session started");
        self.console.say(TITLE)?;
        self.console.say(HELP)?;

        let prompt = self.config.prompt.clone();
        while let Some(line) = self.console.ask(&prompt)? {
            if matches!(line.as_str(), "q" | "quit" | "exit") {
                break;
            }
            self.press_all(&line)?;
            let display = format!("[{}]", self.calculator.display());
            self.console.say(display)?;
        }

        info!("calculator session ended");
        Ok(())
    }

    /// Apply every key on the line. Calculator errors only change the display; an
    /// unknown character is reported and the rest of the line is dropped.
    fn press_all(&mut self, line: &str) -> anyhow::Result<()> {
        for c in line.chars().filter(|c| !c.is_whitespace()) {
            let Some(key) = Key::from_char(c) else {
                self.console.say(format!("Unknown key: {c}"))?;
                break;
            };
            // Failures are already rendered as the display's error indicator.
            let _ = self.calculator.press(key);
        }
        Ok(())
    }
}
