//! Console token reader and transcript writer
//!
//! Input is consumed the way formatted stream extraction does it: tokens are
//! whitespace-delimited and may span lines, a single character can be taken
//! from the next token, and a whole line can be read after skipping leading
//! whitespace (including pending newlines). Output prompts are flushed
//! immediately so they appear before the user types.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{CliError, Result};

pub struct Console<R, W> {
    input: R,
    output: W,
    buffer: String,
    cursor: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buffer: String::new(),
            cursor: 0,
        }
    }

    /// Write text without a newline and flush
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Write one line
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Next whitespace-delimited token
    pub fn next_token(&mut self) -> Result<String> {
        self.skip_whitespace()?;
        let rest = &self.buffer[self.cursor..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = rest[..end].to_string();
        self.cursor += end;
        Ok(token)
    }

    /// Parse the next token, describing the expected value in the error
    pub fn read<T: FromStr>(&mut self, expected: &str) -> Result<T> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| CliError::Input(format!("expected {}, got '{}'", expected, token)))
    }

    /// Next non-whitespace character; the rest of its token stays pending
    pub fn read_char(&mut self) -> Result<char> {
        self.skip_whitespace()?;
        let c = self.buffer[self.cursor..]
            .chars()
            .next()
            .ok_or(CliError::EndOfInput)?;
        self.cursor += c.len_utf8();
        Ok(c)
    }

    /// Rest of the current line after skipping leading whitespace
    pub fn read_line(&mut self) -> Result<String> {
        self.skip_whitespace()?;
        let line = self.buffer[self.cursor..]
            .trim_end_matches(&['\r', '\n'][..])
            .to_string();
        self.cursor = self.buffer.len();
        Ok(line)
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        loop {
            let rest = &self.buffer[self.cursor..];
            let trimmed = rest.trim_start();
            self.cursor += rest.len() - trimmed.len();
            if self.cursor < self.buffer.len() {
                return Ok(());
            }
            self.refill()?;
        }
    }

    fn refill(&mut self) -> Result<()> {
        self.buffer.clear();
        self.cursor = 0;
        if self.input.read_line(&mut self.buffer)? == 0 {
            return Err(CliError::EndOfInput);
        }
        Ok(())
    }
}
