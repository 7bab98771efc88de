//! Board sources: where a session's board comes from.
//!
//! A [`BoardSource`] turns stored puzzle data into a validated [`Board`].
//! [`MixedSource`] is the deceptive dealer: it flips a hidden coin between
//! a grouped source and an ungrouped one, so the player cannot know which
//! kind of board they were given.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::core::{LoadError, RandomSource, Result, BOARD_SIZE};

use super::format::ArchivedPuzzle;
use super::layout::Board;

/// Supplier of boards for new sessions.
pub trait BoardSource {
    /// Produce a board for a new session.
    fn load<R: RandomSource>(&self, rng: &mut R) -> Result<Board>;
}

/// A fixed board always deals itself.
impl BoardSource for Board {
    fn load<R: RandomSource>(&self, _rng: &mut R) -> Result<Board> {
        Ok(self.clone())
    }
}

/// Grouped boards drawn uniformly from a puzzle archive.
#[derive(Clone, Debug, Default)]
pub struct PuzzleArchive {
    boards: Vec<Board>,
}

impl PuzzleArchive {
    /// Build an archive from parsed puzzles.
    ///
    /// Puzzles that fail validation are skipped with a warning. Fails if
    /// no valid puzzle remains.
    pub fn new(puzzles: &[ArchivedPuzzle]) -> Result<Self> {
        let mut boards = Vec::with_capacity(puzzles.len());
        let mut first_error = None;

        for (index, puzzle) in puzzles.iter().enumerate() {
            match Board::try_from(puzzle) {
                Ok(board) => boards.push(board),
                Err(err) => {
                    log::warn!("Skipping archived puzzle #{index} (id {:?}): {err}", puzzle.id);
                    first_error.get_or_insert(err);
                }
            }
        }

        if boards.is_empty() {
            return Err(first_error.unwrap_or(LoadError::EmptyArchive));
        }

        log::debug!("Loaded puzzle archive with {} boards", boards.len());
        Ok(Self { boards })
    }

    /// Parse an archive from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let puzzles: Vec<ArchivedPuzzle> = serde_json::from_str(json)?;
        Self::new(&puzzles)
    }

    /// Parse an archive from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let puzzles: Vec<ArchivedPuzzle> = serde_json::from_reader(reader)?;
        Self::new(&puzzles)
    }

    /// Read and parse an archive file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

impl BoardSource for PuzzleArchive {
    fn load<R: RandomSource>(&self, rng: &mut R) -> Result<Board> {
        if self.boards.is_empty() {
            return Err(LoadError::EmptyArchive);
        }
        let index = rng.below(self.boards.len());
        Ok(self.boards[index].clone())
    }
}

/// Ungrouped boards sampled from a pool of plain words.
#[derive(Clone, Debug)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Build a bank from words. Blank entries and repeats are dropped.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = FxHashSet::default();
        let words: Vec<String> = words
            .into_iter()
            .map(|w| {
                let w: String = w.into();
                w.trim().to_string()
            })
            .filter(|w| !w.is_empty() && seen.insert(w.clone()))
            .collect();

        if words.len() < BOARD_SIZE {
            return Err(LoadError::NotEnoughWords {
                needed: BOARD_SIZE,
                found: words.len(),
            });
        }

        Ok(Self { words })
    }

    /// Parse a JSON array of words.
    pub fn from_json(json: &str) -> Result<Self> {
        let words: Vec<String> = serde_json::from_str(json)?;
        Self::new(words)
    }

    /// Parse newline-separated words.
    pub fn from_lines(text: &str) -> Result<Self> {
        Self::new(text.lines())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl BoardSource for WordBank {
    fn load<R: RandomSource>(&self, rng: &mut R) -> Result<Board> {
        let mut words = self.words.clone();
        rng.shuffle(&mut words);
        words.truncate(BOARD_SIZE);
        Board::ungrouped(words)
    }
}

/// Deals a grouped board with probability `grouped_probability`,
/// otherwise an ungrouped one.
#[derive(Clone, Debug)]
pub struct MixedSource<G, U> {
    grouped: G,
    ungrouped: U,
    grouped_probability: f64,
}

impl<G: BoardSource, U: BoardSource> MixedSource<G, U> {
    /// Create an even 50/50 dealer.
    pub fn new(grouped: G, ungrouped: U) -> Self {
        Self {
            grouped,
            ungrouped,
            grouped_probability: 0.5,
        }
    }

    /// Override the grouped-board probability, clamped to `[0, 1]`.
    /// NaN falls back to an even split.
    #[must_use]
    pub fn with_grouped_probability(mut self, probability: f64) -> Self {
        self.grouped_probability = if probability.is_nan() {
            0.5
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }
}

impl<G: BoardSource, U: BoardSource> BoardSource for MixedSource<G, U> {
    fn load<R: RandomSource>(&self, rng: &mut R) -> Result<Board> {
        if rng.coin(self.grouped_probability) {
            log::debug!("Mixed source dealt a grouped board");
            self.grouped.load(rng)
        } else {
            log::debug!("Mixed source dealt an ungrouped board");
            self.ungrouped.load(rng)
        }
    }
}
