//! Line-oriented prompts for the interactive commands

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::error::{VennError, VennResult};

/// Word that steps a wizard back instead of answering a prompt
pub const BACK: &str = "back";

/// A prompt source and an output sink
///
/// The interactive commands run against stdin/stdout; tests hand in byte
/// buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a prompt and read one trimmed line; `None` once input is exhausted
    pub fn prompt(&mut self, prompt: &str) -> VennResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like `prompt`, but running out of input is an error
    pub fn prompt_required(&mut self, prompt: &str) -> VennResult<String> {
        self.prompt(prompt)?
            .ok_or_else(|| VennError::Io("Input ended before the prompt was answered".into()))
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> VennResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    pub fn print(&mut self, text: impl AsRef<str>) -> VennResult<()> {
        write!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Read a secret without echo
pub fn prompt_secret(prompt: &str) -> VennResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| VennError::Io(format!("Failed to read password: {}", e)))
}

pub fn is_back(answer: &str) -> bool {
    answer.eq_ignore_ascii_case(BACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_trimmed_lines() {
        let mut console = Console::new(Cursor::new("  hello \nBack\n"), Vec::new());

        assert_eq!(console.prompt("Name: ").unwrap().as_deref(), Some("hello"));
        let answer = console.prompt("Next: ").unwrap().unwrap();
        assert!(is_back(&answer));
        assert_eq!(console.prompt("More: ").unwrap(), None);
        assert!(console.prompt_required("Again: ").is_err());

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Name: Next: More: Again: ");
    }
}
