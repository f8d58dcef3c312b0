use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::ops::Range;

/// Outcome of asking for a bounded number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    /// The answer was unusable and the user has been told why.
    Rejected,
    /// Input ended.
    Closed,
}

/// Line-oriented prompt/answer wrapper over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Prints `prompt` and reads one trimmed line. `None` means end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Keeps asking until a positive integer is entered.
    pub fn read_positive(&mut self, prompt: &str, error: &str) -> io::Result<Option<usize>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(n) if n > 0 => return Ok(Some(n)),
                _ => self.say(error)?,
            }
        }
    }

    /// Asks for a number inside `range`, printing `not_a_number` or
    /// `out_of_range` when the answer does not qualify.
    pub fn ask_in_range(
        &mut self,
        prompt: &str,
        range: Range<usize>,
        not_a_number: &str,
        out_of_range: &str,
    ) -> io::Result<Answer<usize>> {
        let Some(line) = self.ask(prompt)? else {
            return Ok(Answer::Closed);
        };
        match parse_number(&line) {
            None => {
                self.say(not_a_number)?;
                Ok(Answer::Rejected)
            }
            Some(n) => match in_range(n, range.start, range.end) {
                Some(v) => Ok(Answer::Value(v)),
                None => {
                    self.say(out_of_range)?;
                    Ok(Answer::Rejected)
                }
            },
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses a whole number, accepting negatives so callers can tell "not a
/// number" apart from "out of range".
pub fn parse_number(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

/// Converts a parsed number into an index below `upper`.
pub fn in_range(n: i64, lower: usize, upper: usize) -> Option<usize> {
    usize::try_from(n)
        .ok()
        .filter(|&v| v >= lower && v < upper)
}
