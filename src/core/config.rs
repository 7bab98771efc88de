//! Session configuration.
//!
//! Board geometry is fixed (four groups of four). What a caller may tune
//! is the mistake budget, the hidden grouped/ungrouped split used by
//! mixed board sources, and the pacing of the post-loss reveal.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of words in one group and in one guess.
pub const GROUP_SIZE: usize = 4;

/// Number of groups on a board.
pub const GROUP_COUNT: usize = 4;

/// Total words on a board.
pub const BOARD_SIZE: usize = GROUP_SIZE * GROUP_COUNT;

/// Mistakes a player may make before the session is lost.
pub const DEFAULT_MISTAKE_BUDGET: u8 = 4;

/// Tunable parameters for a puzzle session.
///
/// ## Example
///
/// ```
/// use rust_connections::core::SessionConfig;
/// use std::time::Duration;
///
/// let config = SessionConfig::new()
///     .with_mistake_budget(3)
///     .with_reveal_pacing(Duration::from_millis(250));
///
/// assert_eq!(config.mistake_budget, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Mistakes allowed before loss. Never below 1.
    pub mistake_budget: u8,

    /// Probability that a mixed board source yields a grouped board.
    pub grouped_probability: f64,

    /// Delay the caller should wait before each post-loss reveal step.
    pub reveal_pacing: Duration,

    /// Shuffle the pool when the session starts.
    pub shuffle_on_load: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mistake_budget: DEFAULT_MISTAKE_BUDGET,
            grouped_probability: 0.5,
            reveal_pacing: Duration::from_secs(1),
            shuffle_on_load: true,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mistake budget. Zero is raised to one.
    #[must_use]
    pub fn with_mistake_budget(mut self, budget: u8) -> Self {
        self.mistake_budget = budget.max(1);
        self
    }

    /// Set the grouped-board probability, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_grouped_probability(mut self, probability: f64) -> Self {
        self.grouped_probability = if probability.is_nan() {
            0.5
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    /// Set the pacing of the post-loss reveal.
    #[must_use]
    pub fn with_reveal_pacing(mut self, pacing: Duration) -> Self {
        self.reveal_pacing = pacing;
        self
    }

    /// Keep the board's load order instead of shuffling on start.
    #[must_use]
    pub fn without_initial_shuffle(mut self) -> Self {
        self.shuffle_on_load = false;
        self
    }

    /// Budget actually used by a session.
    #[must_use]
    pub fn effective_budget(&self) -> u8 {
        self.mistake_budget.max(1)
    }
}
