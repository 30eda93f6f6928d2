//! Line-oriented terminal I/O.

use std::io::{BufRead, Write};

use anyhow::Context;

/// Reads answers from `R`, writes messages and prompts to `W`.
///
/// Generic so sessions run against stdin/stdout or in-memory buffers alike.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line.
    pub fn say(&mut self, line: impl AsRef<str>) -> anyhow::Result<()> {
        writeln!(self.output, "{}", line.as_ref()).context("failed to write to terminal")
    }

    /// Show `prompt` and read one line, trimmed. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}").context("failed to write to terminal")?;
        self.output.flush().context("failed to flush terminal")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from terminal")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ask_trims_and_reports_end_of_input() {
        let mut console = Console::new(Cursor::new("  42 \n"), Vec::new());
        assert_eq!(console.ask("n? ").unwrap().as_deref(), Some("42"));
        assert_eq!(console.ask("n? ").unwrap(), None);
        console.say("bye").unwrap();

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "n? n? bye\n");
    }
}
