//! The engine's boundary with the console.
//!
//! [`ChoiceSource`] supplies the numbers and words the player types;
//! [`Presenter`] receives every [`Report`]. [`ScriptedInput`] and
//! [`RecordingPresenter`] stand in for the console when replaying a
//! fixed sequence of moves.

use std::collections::VecDeque;

use crate::error::{MechError, MechResult};
use crate::report::Report;

/// Supplies the player's choices.
pub trait ChoiceSource {
    /// Read one menu choice. `Ok(None)` means the token was not a number.
    fn read_choice(&mut self) -> MechResult<Option<i64>>;

    /// Read a free-form confirmation token such as "yes".
    fn read_confirmation(&mut self) -> MechResult<String>;
}

/// Receives reports for rendering. Never feeds anything back.
pub trait Presenter {
    /// Render one report.
    fn report(&mut self, report: &Report);
}

/// Input taken from a list of tokens, as if typed one per prompt.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    tokens: VecDeque<String>,
}

impl ScriptedInput {
    /// Create input that yields `tokens` in order, then reports closed.
    pub fn new<S: Into<String>>(tokens: impl IntoIterator<Item = S>) -> Self {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Create input from numeric choices only.
    pub fn choices(choices: impl IntoIterator<Item = i64>) -> Self {
        Self::new(choices.into_iter().map(|c| c.to_string()))
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    fn next_token(&mut self) -> MechResult<String> {
        self.tokens.pop_front().ok_or(MechError::InputClosed)
    }
}

impl ChoiceSource for ScriptedInput {
    fn read_choice(&mut self) -> MechResult<Option<i64>> {
        Ok(self.next_token()?.trim().parse().ok())
    }

    fn read_confirmation(&mut self) -> MechResult<String> {
        self.next_token()
    }
}

/// A presenter that keeps every report it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    /// Reports in the order they arrived.
    pub reports: Vec<Report>,
}

impl RecordingPresenter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any recorded report matches the predicate.
    pub fn any(&self, pred: impl Fn(&Report) -> bool) -> bool {
        self.reports.iter().any(pred)
    }
}

impl Presenter for RecordingPresenter {
    fn report(&mut self, report: &Report) {
        self.reports.push(report.clone());
    }
}
