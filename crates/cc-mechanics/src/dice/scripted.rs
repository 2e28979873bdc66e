//! A die that replays a fixed sequence of rolls.

use std::collections::VecDeque;

use super::{D20_SIDES, DieRoller};

/// Replays scripted d20 results in order.
///
/// Values outside `1..=20` are clamped onto the die. Once the script is
/// exhausted the last value repeats; an empty script always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDie {
    rolls: VecDeque<i32>,
    last: Option<i32>,
}

impl ScriptedDie {
    /// Create a die that will roll `rolls` in order.
    pub fn new(rolls: impl IntoIterator<Item = i32>) -> Self {
        Self {
            rolls: rolls.into_iter().map(|r| r.clamp(1, D20_SIDES)).collect(),
            last: None,
        }
    }

    /// Append more rolls to the end of the script.
    pub fn push(&mut self, roll: i32) {
        self.rolls.push_back(roll.clamp(1, D20_SIDES));
    }

    /// How many scripted rolls have not been used yet.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DieRoller for ScriptedDie {
    fn roll_d20(&mut self) -> i32 {
        let value = self.rolls.pop_front().or(self.last).unwrap_or(1);
        self.last = Some(value);
        value
    }
}
