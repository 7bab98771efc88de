//! JSON wire formats for board data.
//!
//! Two shapes are accepted:
//!
//! - **Board spec**: a single board, tagged by kind, with 1-based levels.
//!
//!   ```json
//!   {"kind": "grouped", "categories": [{"label": "...", "members": ["..."], "level": 1}]}
//!   {"kind": "ungrouped", "words": ["...", "..."]}
//!   ```
//!
//! - **Puzzle archive**: the published connections archive, an array of
//!   puzzles whose answers use **0-based** levels.
//!
//!   ```json
//!   [{"id": 1, "date": "2023-06-12", "answers": [
//!       {"level": 0, "group": "...", "members": ["..."]}
//!   ]}]
//!   ```

use serde::{Deserialize, Serialize};

use crate::core::{Category, DifficultyLevel, LoadError, Result};

use super::layout::{Board, Layout};

/// Serialized form of a [`Board`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BoardSpec {
    Grouped { categories: Vec<CategorySpec> },
    Ungrouped { words: Vec<String> },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub label: String,
    pub members: Vec<String>,
    pub level: u8,
}

impl TryFrom<BoardSpec> for Board {
    type Error = LoadError;

    fn try_from(spec: BoardSpec) -> Result<Self> {
        match spec {
            BoardSpec::Grouped { categories } => {
                let categories = categories
                    .into_iter()
                    .map(|c| {
                        let level = DifficultyLevel::try_from(c.level)?;
                        Ok(Category::new(c.label, c.members, level))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Board::grouped(categories)
            }
            BoardSpec::Ungrouped { words } => Board::ungrouped(words),
        }
    }
}

impl From<Board> for BoardSpec {
    fn from(board: Board) -> Self {
        match board.layout() {
            Layout::Grouped(categories) => BoardSpec::Grouped {
                categories: categories
                    .iter()
                    .map(|c| CategorySpec {
                        label: c.label.clone(),
                        members: c.members.to_vec(),
                        level: c.level.get(),
                    })
                    .collect(),
            },
            Layout::Ungrouped(words) => BoardSpec::Ungrouped { words: words.clone() },
        }
    }
}

/// One puzzle from the published archive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchivedPuzzle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub answers: Vec<ArchivedAnswer>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchivedAnswer {
    /// 0-based difficulty.
    pub level: u8,
    pub group: String,
    pub members: Vec<String>,
}

impl TryFrom<&ArchivedPuzzle> for Board {
    type Error = LoadError;

    fn try_from(puzzle: &ArchivedPuzzle) -> Result<Self> {
        let categories = puzzle
            .answers
            .iter()
            .map(|a| {
                let level = DifficultyLevel::from_zero_based(a.level)
                    .ok_or(LoadError::InvalidLevel(a.level))?;
                Ok(Category::new(a.group.clone(), a.members.iter().cloned(), level))
            })
            .collect::<Result<Vec<_>>>()?;
        Board::grouped(categories)
    }
}

/// Parse a single board spec.
pub fn parse_board(json: &str) -> Result<Board> {
    Ok(serde_json::from_str(json)?)
}
