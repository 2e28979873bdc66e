//! Reading the player's input from a line-based reader.

use std::collections::VecDeque;
use std::io::BufRead;

use cc_mechanics::{ChoiceSource, MechError, MechResult};

/// Whitespace-separated tokens read from `R`, one line at a time.
///
/// Several answers may be typed on one line; blank lines are skipped.
pub struct ConsoleInput<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// The rest of the current line, or the next line if nothing is pending.
    pub fn read_line(&mut self) -> MechResult<String> {
        if !self.pending.is_empty() {
            let rest: Vec<String> = self.pending.drain(..).collect();
            return Ok(rest.join(" "));
        }
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(MechError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn next_token(&mut self) -> MechResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(MechError::InputClosed);
            }
            let tokens = line.split_whitespace().map(str::to_string);
            self.pending.extend(tokens);
        }
    }
}

impl<R: BufRead> ChoiceSource for ConsoleInput<R> {
    fn read_choice(&mut self) -> MechResult<Option<i64>> {
        Ok(self.next_token()?.parse().ok())
    }

    fn read_confirmation(&mut self) -> MechResult<String> {
        self.next_token()
    }
}
