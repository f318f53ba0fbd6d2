//! Console prompting for account numbers.
//!
//! [`Prompter`] asks for a number, reads one line, and asks again until the
//! line parses as a non-negative account number. It is generic over the
//! reader and writer so it can be driven by stdin/stdout or by in-memory
//! buffers in tests.
//!
//! # Example
//!
//! ```
//! use cc_classifier::prompt::Prompter;
//!
//! let input = b"-4\nhello\n4003600000000014\n";
//! let mut output = Vec::new();
//!
//! let account = Prompter::new(&input[..], &mut output)
//!     .read_account_number()
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(account.value(), 4003600000000014);
//! assert_eq!(output, b"Number: Number: Number: ");
//! ```

use std::io::{self, BufRead, Write};

use crate::validate::parse_account_number;
use crate::AccountNumber;

/// Prompt written before each read.
pub const DEFAULT_PROMPT: &str = "Number: ";

/// Reads account numbers interactively.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    prompt: String,
    rejected: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter using [`DEFAULT_PROMPT`].
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompt: DEFAULT_PROMPT.to_string(),
            rejected: 0,
        }
    }

    /// Replaces the prompt text.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns how many lines have been rejected so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Prompts until a valid, non-negative account number is entered.
    ///
    /// Negative and malformed lines are discarded and the prompt is shown
    /// again. Returns `Ok(None)` if the input ends first.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading the input or writing the prompt.
    pub fn read_account_number(&mut self) -> io::Result<Option<AccountNumber>> {
        let mut buf = Vec::new();
        loop {
            self.output.write_all(self.prompt.as_bytes())?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }

            let Ok(line) = std::str::from_utf8(&buf) else {
                self.rejected += 1;
                #[cfg(feature = "tracing")]
                tracing::debug!(rejected = self.rejected, "input is not valid UTF-8, prompting again");
                continue;
            };

            match parse_account_number(line) {
                Ok(account) => return Ok(Some(account)),
                Err(_err) => {
                    self.rejected += 1;
                    #[cfg(feature = "tracing")]
                    tracing::debug!(error = %_err, rejected = self.rejected, "input rejected, prompting again");
                }
            }
        }
    }

    /// Consumes the prompter and returns the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Option<u64>, String, usize) {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input.as_bytes(), &mut output);
        let account = prompter.read_account_number().unwrap();
        let rejected = prompter.rejected();
        drop(prompter);
        (
            account.map(|a| a.value()),
            String::from_utf8(output).unwrap(),
            rejected,
        )
    }

    #[test]
    fn test_first_line_accepted() {
        let (value, output, rejected) = run("378282246310005\n");
        assert_eq!(value, Some(378282246310005));
        assert_eq!(output, "Number: ");
        assert_eq!(rejected, 0);
    }

    #[test]
    fn test_reprompts_on_negative() {
        let (value, output, rejected) = run("-1\n-378282246310005\n5555555555554444\n");
        assert_eq!(value, Some(5555555555554444));
        assert_eq!(output, "Number: Number: Number: ");
        assert_eq!(rejected, 2);
    }

    #[test]
    fn test_reprompts_on_garbage_and_blank() {
        let (value, _, rejected) = run("\nfoo\n12.5x\n0\n");
        assert_eq!(value, Some(0));
        assert_eq!(rejected, 3);
    }

    #[test]
    fn test_reprompts_on_invalid_utf8() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(&b"\xff\xfe\n4003600000000014\n"[..], &mut output);
        let account = prompter.read_account_number().unwrap();
        assert_eq!(account.map(|a| a.value()), Some(4003600000000014));
        assert_eq!(prompter.rejected(), 1);
        drop(prompter);
        assert_eq!(output, b"Number: Number: ");
    }

    #[test]
    fn test_eof_returns_none() {
        let (value, output, _) = run("");
        assert_eq!(value, None);
        assert_eq!(output, "Number: ");

        let (value, _, rejected) = run("-5\n");
        assert_eq!(value, None);
        assert_eq!(rejected, 1);
    }

    #[test]
    fn test_last_line_without_newline() {
        let (value, _, _) = run("4222222222222");
        assert_eq!(value, Some(4222222222222));
    }

    #[test]
    fn test_custom_prompt() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new("1\n".as_bytes(), &mut output).with_prompt("Card: ");
        prompter.read_account_number().unwrap();
        drop(prompter);
        assert_eq!(output, b"Card: ");
    }
}
