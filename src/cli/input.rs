use std::fmt::Display;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a whole number")]
    Malformed(String),
}

/// Parses a whole line as one integer. Surrounding whitespace is ignored,
/// anything else on the line makes it malformed.
pub fn parse_int(line: &str) -> Result<i64, InputError> {
    line.trim()
        .parse::<i64>()
        .map_err(|_| InputError::Malformed(line.trim().to_string()))
}

/// Line-oriented terminal over any reader/writer pair.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    /// Writes `message` without a newline and flushes it.
    pub fn show(&mut self, message: &str) -> io::Result<()> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()
    }

    /// Writes `message` without a newline, then reads the answer.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.show(message)?;
        self.read_line()
    }

    /// Next line without its line terminator; `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(|c: char| c == '\r' || c == '\n').len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
