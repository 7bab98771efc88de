//! Words on the board and their difficulty levels.

use serde::{Deserialize, Serialize};

use super::error::LoadError;

/// Difficulty level of a category, 1 (easiest) to 4 (hardest).
///
/// ```
/// use rust_connections::core::DifficultyLevel;
///
/// assert!(DifficultyLevel::new(4).is_some());
/// assert!(DifficultyLevel::new(5).is_none());
/// assert_eq!(DifficultyLevel::from_zero_based(0).unwrap().get(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DifficultyLevel(u8);

impl DifficultyLevel {
    pub const EASIEST: Self = Self(1);
    pub const HARDEST: Self = Self(4);

    /// Create a level from its 1-based value.
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        match level {
            1..=4 => Some(Self(level)),
            _ => None,
        }
    }

    /// Create a level from a 0-based value, as used by published puzzle archives.
    #[must_use]
    pub fn from_zero_based(level: u8) -> Option<Self> {
        level.checked_add(1).and_then(Self::new)
    }

    /// Level for the `n`th cleared group (0-based), saturating at the hardest level.
    #[must_use]
    pub fn for_cleared_count(cleared: usize) -> Self {
        let level = u8::try_from(cleared.saturating_add(1)).unwrap_or(u8::MAX);
        Self(level.clamp(1, 4))
    }

    /// Raw 1-based value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DifficultyLevel {
    type Error = LoadError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(LoadError::InvalidLevel(value))
    }
}

impl From<DifficultyLevel> for u8 {
    fn from(level: DifficultyLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level {}", self.0)
    }
}

/// A word in the active pool.
///
/// Identity is by `text`, which is unique within a board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub level: DifficultyLevel,
    pub selected: bool,
}

impl Word {
    /// Create an unselected word.
    pub fn new(text: impl Into<String>, level: DifficultyLevel) -> Self {
        Self {
            text: text.into(),
            level,
            selected: false,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bounds() {
        assert_eq!(DifficultyLevel::new(0), None);
        assert_eq!(DifficultyLevel::new(1), Some(DifficultyLevel::EASIEST));
        assert_eq!(DifficultyLevel::new(4), Some(DifficultyLevel::HARDEST));
        assert_eq!(DifficultyLevel::from_zero_based(3), Some(DifficultyLevel::HARDEST));
        assert_eq!(DifficultyLevel::from_zero_based(4), None);
        assert_eq!(DifficultyLevel::from_zero_based(255), None);
    }

    #[test]
    fn test_level_for_cleared_count() {
        assert_eq!(DifficultyLevel::for_cleared_count(0).get(), 1);
        assert_eq!(DifficultyLevel::for_cleared_count(3).get(), 4);
        assert_eq!(DifficultyLevel::for_cleared_count(9).get(), 4);
    }

    #[test]
    fn test_level_serde_rejects_out_of_range() {
        let level: DifficultyLevel = serde_json::from_str("2").unwrap();
        assert_eq!(level.get(), 2);
        assert!(serde_json::from_str::<DifficultyLevel>("5").is_err());
    }

    #[test]
    fn test_word_new_is_unselected() {
        let word = Word::new("apple", DifficultyLevel::EASIEST);
        assert!(!word.selected);
        assert_eq!(word.to_string(), "apple");
    }
}
