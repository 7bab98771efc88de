//! Core vocabulary: words, categories, randomness, configuration, errors.
//!
//! Everything here is independent of how a board is sourced or how a
//! session is played.

pub mod category;
pub mod config;
pub mod error;
pub mod rng;
pub mod word;

pub use category::{Category, Members};
pub use config::{SessionConfig, BOARD_SIZE, DEFAULT_MISTAKE_BUDGET, GROUP_COUNT, GROUP_SIZE};
pub use error::{LoadError, Result};
pub use rng::{GameRng, RandomSource};
pub use word::{DifficultyLevel, Word};
