use anyhow::Result;
use std::io::{BufRead, Write};

/// Blocking line prompts over any reader/writer pair.
///
/// Every read returns `Ok(None)` once input is exhausted so callers can unwind
/// instead of spinning on an empty stdin.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompts until the answer parses as a non-negative integer.
    pub fn read_number(&mut self, prompt: &str) -> Result<Option<usize>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "Enter a valid number.")?,
            }
        }
    }

    /// Re-prompts until the answer is within `1..=max`.
    pub fn choose(&mut self, prompt: &str, max: usize) -> Result<Option<usize>> {
        loop {
            let Some(n) = self.read_number(prompt)? else {
                return Ok(None);
            };
            if (1..=max).contains(&n) {
                return Ok(Some(n));
            }
            writeln!(self.output, "Invalid choice. Try again.")?;
        }
    }
}
