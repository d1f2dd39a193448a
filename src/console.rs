//! Line-oriented console input and output.
//!
//! Every read consumes exactly one full line, so free text with spaces is kept intact
//! and a prompt never picks up leftovers from a previous answer.

use std::io::{self, BufRead, Write};

/// Prompt/answer channel over any reader and writer (stdin/stdout in the binary).
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writer for regular output.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print a prompt without a trailing newline.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Read one line without its line ending. `None` once input is exhausted.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD rather than failing the read.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Read one line as an integer.
    ///
    /// The inner `None` means the line was not a number; callers treat it as "no match".
    pub fn read_int(&mut self) -> io::Result<Option<Option<i64>>> {
        Ok(self.read_line()?.map(|line| line.trim().parse().ok()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
