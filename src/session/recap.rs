//! Post-game results recap.
//!
//! One row per judged guess, each word tagged with the difficulty level it
//! is displayed with, plus a rating for the finish.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DifficultyLevel, GROUP_SIZE};

use super::state::{SessionState, Terminal};

/// Rating of a finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Perfection {
    Perfect,
    Great,
    Solid,
    Phew,
    NextTime,
}

impl Perfection {
    /// Rate a finished session by the mistakes made. `None` while still
    /// in progress.
    #[must_use]
    pub fn rate(terminal: Terminal, mistakes_made: u8) -> Option<Self> {
        match terminal {
            Terminal::InProgress => None,
            Terminal::Lost => Some(Perfection::NextTime),
            Terminal::Won => Some(match mistakes_made {
                0 => Perfection::Perfect,
                1 => Perfection::Great,
                2 => Perfection::Solid,
                _ => Perfection::Phew,
            }),
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Perfection::Perfect => "Perfect!",
            Perfection::Great => "Great!",
            Perfection::Solid => "Solid!",
            Perfection::Phew => "Phew!",
            Perfection::NextTime => "Next time!",
        }
    }
}

/// One guess in the recap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecapRow {
    pub words: SmallVec<[(String, DifficultyLevel); GROUP_SIZE]>,
}

impl RecapRow {
    /// Whether every word in the guess shares one level.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.words.windows(2).all(|pair| pair[0].1 == pair[1].1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recap {
    pub rows: Vec<RecapRow>,
    pub terminal: Terminal,
    pub mistakes_remaining: u8,
    pub mistakes_made: u8,
    pub perfection: Option<Perfection>,
}

impl Recap {
    /// Build the recap. `mistake_budget` is the budget the session
    /// started with.
    #[must_use]
    pub fn from_state(state: &SessionState, mistake_budget: u8) -> Self {
        let board = state.board();
        let rows = state
            .history()
            .iter()
            .map(|guess| RecapRow {
                words: guess
                    .words()
                    .map(|w| (w.to_string(), board.level_of(w).unwrap_or(DifficultyLevel::EASIEST)))
                    .collect(),
            })
            .collect();

        let mistakes_made = mistake_budget.saturating_sub(state.mistakes_remaining());

        Self {
            rows,
            terminal: state.terminal(),
            mistakes_remaining: state.mistakes_remaining(),
            mistakes_made,
            perfection: Perfection::rate(state.terminal(), mistakes_made),
        }
    }

    /// Coloured-square grid, one line per guess.
    #[must_use]
    pub fn to_grid(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.words.iter().map(|(_, level)| level_square(*level)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn level_square(level: DifficultyLevel) -> char {
    match level.get() {
        1 => '🟨',
        2 => '🟩',
        3 => '🟦',
        _ => '🟪',
    }
}
