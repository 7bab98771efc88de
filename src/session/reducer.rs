//! Outcome Reducer: applies a judgment to the session state.
//!
//! Takes the state by value and returns the next state together with the
//! single result reported to the caller. The reducer trusts the
//! evaluator's duplicate short-circuit and never re-checks history.

use serde::{Deserialize, Serialize};

use crate::core::GROUP_COUNT;

use super::evaluator::{Judgment, Verdict};
use super::state::{SessionState, Terminal};

/// Result of one accepted submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmitResult {
    Correct,
    Incorrect,
    OneAway,
    Same,
    Win,
    Loss,
}

impl SubmitResult {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SubmitResult::Correct => "correct",
            SubmitResult::Incorrect => "incorrect",
            SubmitResult::OneAway => "one-away",
            SubmitResult::Same => "same",
            SubmitResult::Win => "win",
            SubmitResult::Loss => "loss",
        }
    }

    /// Whether this result ends the session.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, SubmitResult::Win | SubmitResult::Loss)
    }
}

impl std::fmt::Display for SubmitResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply a judgment, producing the next state and the reported result.
///
/// A charged judgment that exhausts the budget is a loss regardless of its
/// verdict; nothing is cleared in that case.
#[must_use]
pub fn reduce(mut state: SessionState, judgment: Judgment) -> (SessionState, SubmitResult) {
    let (guess, verdict, charged) = match judgment {
        Judgment::Same => return (state, SubmitResult::Same),
        Judgment::Judged { guess, verdict, charged } => (guess, verdict, charged),
    };

    state.history.push_back(guess);

    if charged {
        state.mistakes_remaining = state.mistakes_remaining.saturating_sub(1);
        if state.mistakes_remaining == 0 {
            state.terminal = Terminal::Lost;
            return (state, SubmitResult::Loss);
        }
    }

    let result = match verdict {
        Verdict::Correct(category) => {
            state.clear_category(category);
            if state.cleared.len() >= GROUP_COUNT {
                state.terminal = Terminal::Won;
                SubmitResult::Win
            } else {
                SubmitResult::Correct
            }
        }
        Verdict::OneAway => SubmitResult::OneAway,
        Verdict::Incorrect => SubmitResult::Incorrect,
    };

    (state, result)
}
