//! # rust-connections
//!
//! A word-grouping puzzle session engine. Sixteen words are dealt; the
//! player selects four at a time and submits guesses until every group is
//! cleared or the mistake budget runs out.
//!
//! ## The hidden mode
//!
//! Half the boards have no true grouping at all. On those *ungrouped*
//! boards each guess is judged by a randomized policy, and a fresh guess
//! of the final four words is always accepted. After the game the player
//! guesses which kind of board they were playing.
//!
//! ## Design Principles
//!
//! 1. **Value-Typed State**: `SessionState` is an explicit value built on
//!    `im` persistent collections; the evaluator and reducer are plain
//!    functions over it.
//!
//! 2. **Injected Randomness**: every random decision goes through the
//!    `RandomSource` trait. `GameRng` is seedable and deterministic.
//!
//! 3. **Validate Once**: boards are validated when loaded. A running
//!    session never fails; every judgment is a normal outcome.
//!
//! ## Modules
//!
//! - `core`: Words, categories, RNG, configuration, load errors
//! - `board`: Board layouts, JSON formats, board sources
//! - `session`: Session state, evaluator, reducer, endgame, recap

pub mod board;
pub mod core;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Category, DifficultyLevel, GameRng, LoadError, RandomSource, SessionConfig, Word,
    BOARD_SIZE, GROUP_COUNT, GROUP_SIZE,
};

pub use crate::board::{Board, BoardKind, BoardSource, MixedSource, PuzzleArchive, WordBank};

pub use crate::session::{
    DisplayGroup, Guess, Judgment, MetaGuess, Perfection, PuzzleSession, Recap, RevealStep,
    SessionState,
    SubmitResult, Terminal, Verdict,
};
