//! Categories: a label, four member words, and a difficulty level.
//!
//! Grouped boards carry four real categories. Ungrouped boards have none;
//! when their randomized policy awards a "correct" guess, a *synthetic*
//! category is manufactured from the guessed words. Both kinds share this
//! one type so the reducer and endgame treat them uniformly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GROUP_SIZE;
use super::word::DifficultyLevel;

/// Member list sized for one group.
pub type Members = SmallVec<[String; GROUP_SIZE]>;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Display label. Opaque for synthetic categories.
    pub label: String,

    /// Member words, in load order.
    pub members: Members,

    /// Difficulty level.
    pub level: DifficultyLevel,

    /// `true` if manufactured for an ungrouped board.
    #[serde(default)]
    pub synthetic: bool,
}

impl Category {
    /// Create a real category.
    pub fn new<I, S>(label: impl Into<String>, members: I, level: DifficultyLevel) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            members: members.into_iter().map(Into::into).collect(),
            level,
            synthetic: false,
        }
    }

    /// Manufacture a placeholder category from guessed words.
    ///
    /// `cleared` is the number of groups cleared so far; it determines the
    /// level. `token` keeps labels distinct across one session.
    pub fn synthetic<I, S>(members: I, cleared: usize, token: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: format!("?{}-{}", cleared + 1, token),
            members: members.into_iter().map(Into::into).collect(),
            level: DifficultyLevel::for_cleared_count(cleared),
            synthetic: true,
        }
    }

    /// Check whether a word belongs to this category.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.members.iter().any(|m| m == word)
    }

    /// Count how many of the given words belong to this category.
    pub fn likeness<'a>(&self, words: impl IntoIterator<Item = &'a str>) -> usize {
        words.into_iter().filter(|w| self.contains(w)).count()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.label, self.level, self.members.join(", "))
    }
}
