use hms_core::PatientFields;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::{Error, Result};

/// Line-oriented prompting over any input/output pair.
///
/// Every answer is one whole line, so names and addresses may contain
/// spaces. Reaching the end of the input yields [`Error::InputClosed`].
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub const fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a full line.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `prompt` without a newline and read the answer, trimmed.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// they end up in the usual invalid-answer paths.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            debug!("Input closed at prompt {prompt:?}");
            return Err(Error::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Ask until a non-empty answer is given.
    pub fn ask_text(&mut self, prompt: &str, label: &str) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say(&format!("{label} cannot be empty."))?;
        }
    }

    pub fn ask_age(&mut self) -> Result<i32> {
        loop {
            if let Ok(age) = self.ask("Age: ")?.parse::<i32>() {
                return Ok(age);
            }
            self.say("Invalid age. Please enter a whole number.")?;
        }
    }

    pub fn ask_gender(&mut self) -> Result<char> {
        loop {
            let answer = self.ask("Gender (M/F): ")?;
            let mut chars = answer.chars();
            if let (Some(gender), None) = (chars.next(), chars.next()) {
                return Ok(gender);
            }
            self.say("Invalid gender. Please enter a single character.")?;
        }
    }

    /// Collect the five patient fields in their fixed order.
    pub fn ask_fields(&mut self) -> Result<PatientFields> {
        let name = self.ask_text("Name: ", "Name")?;
        let age = self.ask_age()?;
        let gender = self.ask_gender()?;
        let address = self.ask_text("Address: ", "Address")?;
        let disease = self.ask_text("Disease: ", "Disease")?;

        Ok(PatientFields {
            name,
            age,
            gender,
            address,
            disease,
        })
    }
}
