//! Validated board layouts.
//!
//! A [`Board`] is either grouped (four real categories) or ungrouped
//! (sixteen plain words). Construction validates cardinality and word
//! uniqueness, so a session never starts from a malformed board.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{
    Category, DifficultyLevel, LoadError, Result, Word, BOARD_SIZE, GROUP_COUNT, GROUP_SIZE,
};

use super::format::BoardSpec;

/// Which kind of board a session was dealt. Hidden from the player
/// until the meta-guess is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardKind {
    /// A true 4x4 category partition exists.
    Grouped,
    /// No grouping; outcomes come from a randomized policy.
    Ungrouped,
}

impl BoardKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BoardKind::Grouped => "grouped",
            BoardKind::Ungrouped => "ungrouped",
        }
    }
}

impl std::fmt::Display for BoardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BoardKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grouped" | "regular" => Ok(BoardKind::Grouped),
            "ungrouped" | "random" => Ok(BoardKind::Ungrouped),
            other => Err(format!("unknown board kind {other:?}")),
        }
    }
}

/// The tagged board shape the evaluator dispatches on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    Grouped(Vec<Category>),
    Ungrouped(Vec<String>),
}

/// A validated board.
///
/// ```
/// use rust_connections::board::{Board, BoardKind};
///
/// let words: Vec<String> = (0..16).map(|i| format!("w{i}")).collect();
/// let board = Board::ungrouped(words).unwrap();
/// assert_eq!(board.kind(), BoardKind::Ungrouped);
/// assert!(board.categories().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSpec", into = "BoardSpec")]
pub struct Board {
    layout: Layout,
}

impl Board {
    /// Build a grouped board from four categories of four unique words.
    pub fn grouped(categories: Vec<Category>) -> Result<Self> {
        if categories.len() != GROUP_COUNT {
            return Err(LoadError::CategoryCount {
                expected: GROUP_COUNT,
                found: categories.len(),
            });
        }

        for category in &categories {
            if category.members.len() != GROUP_SIZE {
                return Err(LoadError::MemberCount {
                    label: category.label.clone(),
                    expected: GROUP_SIZE,
                    found: category.members.len(),
                });
            }
        }

        ensure_unique(categories.iter().flat_map(|c| c.members.iter()))?;

        Ok(Self {
            layout: Layout::Grouped(categories),
        })
    }

    /// Build an ungrouped board from sixteen unique words.
    pub fn ungrouped(words: Vec<String>) -> Result<Self> {
        if words.len() != BOARD_SIZE {
            return Err(LoadError::WordCount {
                expected: BOARD_SIZE,
                found: words.len(),
            });
        }

        ensure_unique(words.iter())?;

        Ok(Self {
            layout: Layout::Ungrouped(words),
        })
    }

    #[must_use]
    pub fn kind(&self) -> BoardKind {
        match self.layout {
            Layout::Grouped(_) => BoardKind::Grouped,
            Layout::Ungrouped(_) => BoardKind::Ungrouped,
        }
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Real categories, in load order. Empty for ungrouped boards.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        match &self.layout {
            Layout::Grouped(categories) => categories,
            Layout::Ungrouped(_) => &[],
        }
    }

    /// All sixteen words, in load order, unselected.
    ///
    /// Words on an ungrouped board carry the easiest level.
    #[must_use]
    pub fn words(&self) -> Vec<Word> {
        match &self.layout {
            Layout::Grouped(categories) => categories
                .iter()
                .flat_map(|c| c.members.iter().map(move |m| Word::new(m.clone(), c.level)))
                .collect(),
            Layout::Ungrouped(words) => words
                .iter()
                .map(|w| Word::new(w.clone(), DifficultyLevel::EASIEST))
                .collect(),
        }
    }

    /// Difficulty level a word is displayed with, if it is on this board.
    #[must_use]
    pub fn level_of(&self, word: &str) -> Option<DifficultyLevel> {
        match &self.layout {
            Layout::Grouped(categories) => {
                categories.iter().find(|c| c.contains(word)).map(|c| c.level)
            }
            Layout::Ungrouped(words) => words
                .iter()
                .any(|w| w == word)
                .then_some(DifficultyLevel::EASIEST),
        }
    }
}

fn ensure_unique<'a>(words: impl Iterator<Item = &'a String>) -> Result<()> {
    let mut seen = FxHashSet::default();
    for word in words {
        if !seen.insert(word.as_str()) {
            return Err(LoadError::DuplicateWord(word.clone()));
        }
    }
    Ok(())
}
