//! Line-oriented prompting over any `BufRead` + `Write` pair.
//!
//! Validation loops are unbounded: a prompt repeats until the validator
//! accepts the input. End of input is the only other way out and surfaces
//! as `io::ErrorKind::UnexpectedEof`.

use std::io::{self, BufRead, Write};

pub const PROMPT_MARKER: &str = ": ";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes text without waiting for input.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Prints `message` and reads one line with the line ending removed.
    pub fn ask(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{message}\n{PROMPT_MARKER}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a response",
            ));
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Reads a menu selection, trimmed and lowercased.
    pub fn choose(&mut self, message: &str) -> io::Result<String> {
        Ok(normalize_choice(&self.ask(message)?))
    }

    /// Asks `message`, then re-asks `retry` until `validate` accepts the
    /// input.
    pub fn ask_until<T, F>(&mut self, message: &str, retry: &str, validate: F) -> io::Result<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        let mut answer = self.ask(message)?;
        loop {
            if let Some(value) = validate(&answer) {
                return Ok(value);
            }
            answer = self.ask(retry)?;
        }
    }

    /// Repeats until one of `options` is chosen; returns the chosen option.
    pub fn choose_from(
        &mut self,
        message: &str,
        retry: &str,
        options: &[&'static str],
    ) -> io::Result<&'static str> {
        self.ask_until(message, retry, |answer| {
            let answer = normalize_choice(answer);
            options.iter().copied().find(|option| *option == answer)
        })
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

fn normalize_choice(answer: &str) -> String {
    answer.trim().to_lowercase()
}
