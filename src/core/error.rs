//! Load-time failures.
//!
//! Nothing that happens during play is an error: every judgment is a
//! normal outcome. The only fallible step is turning external puzzle data
//! into a validated [`Board`](crate::board::Board).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Malformed board data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read board data: {0}")]
    Io(#[from] std::io::Error),
    #[error("Puzzle archive contains no puzzles")]
    EmptyArchive,
    #[error("Expected {expected} categories, found {found}")]
    CategoryCount { expected: usize, found: usize },
    #[error("Category {label:?} has {found} members, expected {expected}")]
    MemberCount {
        label: String,
        expected: usize,
        found: usize,
    },
    #[error("Expected {expected} words, found {found}")]
    WordCount { expected: usize, found: usize },
    #[error("Word {0:?} appears more than once")]
    DuplicateWord(String),
    #[error("Difficulty level {0} is outside 1..=4")]
    InvalidLevel(u8),
    #[error("Word bank holds {found} distinct words, need at least {needed}")]
    NotEnoughWords { needed: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, LoadError>;
