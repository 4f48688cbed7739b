//! Line-oriented prompting over any reader/writer pair
//!
//! End of input is reported as `None` so callers can wind down instead of
//! spinning on a closed stdin.

use std::io::{BufRead, Write};

use crate::error::ExpenseResult;

/// Reads answers from `input` after writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a new prompter
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt for a line, returning it without the line ending
    pub fn prompt(&mut self, message: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Prompt until a non-blank answer is given, returning it trimmed
    pub fn prompt_nonempty(&mut self, message: &str) -> ExpenseResult<Option<String>> {
        loop {
            match self.prompt(message)? {
                None => return Ok(None),
                Some(answer) if !answer.trim().is_empty() => {
                    return Ok(Some(answer.trim().to_string()))
                }
                Some(_) => continue,
            }
        }
    }

    /// Write a line of text
    pub fn say(&mut self, text: &str) -> ExpenseResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write pre-formatted text as-is
    pub fn write_block(&mut self, text: &str) -> ExpenseResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_strips_line_ending_only() {
        let mut output = Vec::new();
        {
            let mut p = Prompter::new(Cursor::new(b"  YES \r\n".to_vec()), &mut output);
            assert_eq!(p.prompt("? ").unwrap().as_deref(), Some("  YES "));
        }
        assert_eq!(String::from_utf8(output).unwrap(), "? ");
    }

    #[test]
    fn test_prompt_eof() {
        let mut p = prompter("");
        assert_eq!(p.prompt("? ").unwrap(), None);
    }

    #[test]
    fn test_prompt_last_line_without_newline() {
        let mut p = prompter("8");
        assert_eq!(p.prompt("? ").unwrap().as_deref(), Some("8"));
    }

    #[test]
    fn test_prompt_nonempty_repeats() {
        let mut output = Vec::new();
        {
            let mut p = Prompter::new(Cursor::new(b"\n   \n Food \n".to_vec()), &mut output);
            assert_eq!(p.prompt_nonempty("Category: ").unwrap().as_deref(), Some("Food"));
        }
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Category: Category: Category: "
        );
    }

    #[test]
    fn test_prompt_nonempty_eof() {
        let mut p = prompter("\n\n");
        assert_eq!(p.prompt_nonempty("Amount: ").unwrap(), None);
    }
}
