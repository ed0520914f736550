use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

use derive_more::{Display, Error, From, IsVariant};

/// The reasons a prompt can fail to produce an integer.
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum InputError {
    Io(io::Error),
    Parse(ParseIntError),
    #[display("end of input")]
    Eof,
}

/// Reads integers from an input source, one per line, after writing a prompt to the output.
pub(crate) struct Prompter<'a, R, W> {
    pub input: &'a mut R,
    pub output: &'a mut W,
}

impl<R: BufRead, W: Write> Prompter<'_, R, W> {
    /// Writes `prompt` and reads a single trimmed line as an `i32`.
    pub fn read_int(&mut self, prompt: &str) -> Result<i32, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        Ok(line.trim().parse()?)
    }
}
