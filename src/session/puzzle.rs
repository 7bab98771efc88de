//! `PuzzleSession`: one board, from load to meta-guess.
//!
//! Owns the session state, its configuration and its random source, and
//! drives each submission through evaluator → reducer → endgame.

use std::sync::Arc;

use crate::board::{Board, BoardKind, BoardSource, MixedSource};
use crate::core::{GameRng, RandomSource, Result, SessionConfig, Word};

use super::endgame::{
    display_groups, record_meta_guess, DisplayGroup, MetaGuess, RevealQueue, RevealStep,
};
use super::evaluator::evaluate;
use super::recap::Recap;
use super::reducer::{reduce, SubmitResult};
use super::state::{SessionState, Terminal};

/// A single-player puzzle session.
///
/// ## Example
///
/// ```
/// use rust_connections::board::Board;
/// use rust_connections::core::{Category, DifficultyLevel, GameRng, SessionConfig};
/// use rust_connections::session::{PuzzleSession, SubmitResult};
///
/// let categories = ["a", "b", "c", "d"]
///     .iter()
///     .enumerate()
///     .map(|(i, p)| {
///         let level = DifficultyLevel::new(i as u8 + 1).unwrap();
///         Category::new(p.to_uppercase(), (1..=4).map(|n| format!("{p}{n}")), level)
///     })
///     .collect();
/// let board = Board::grouped(categories).unwrap();
///
/// let mut session = PuzzleSession::new(board, SessionConfig::default(), GameRng::new(42));
/// for word in ["a1", "a2", "a3", "a4"] {
///     session.toggle_selection(word);
/// }
/// assert_eq!(session.submit(), Some(SubmitResult::Correct));
/// ```
#[derive(Clone, Debug)]
pub struct PuzzleSession<R: RandomSource = GameRng> {
    state: SessionState,
    config: SessionConfig,
    rng: R,
    reveal: Option<RevealQueue>,
    meta_guess: Option<MetaGuess>,
}

impl<R: RandomSource> PuzzleSession<R> {
    /// Start a session on a validated board.
    pub fn new(board: impl Into<Arc<Board>>, config: SessionConfig, mut rng: R) -> Self {
        let mut state = SessionState::new(board, config.effective_budget());
        if config.shuffle_on_load {
            state.shuffle_pool(&mut rng);
        }

        log::info!(
            "Started puzzle session: {} words, {} mistakes allowed",
            state.pool().len(),
            state.mistakes_remaining()
        );

        Self {
            state,
            config,
            rng,
            reveal: None,
            meta_guess: None,
        }
    }

    /// Load a board from a source and start a session on it.
    pub fn load<S: BoardSource>(source: &S, config: SessionConfig, mut rng: R) -> Result<Self> {
        let board = source.load(&mut rng)?;
        Ok(Self::new(board, config, rng))
    }

    /// Deal a hidden grouped-or-ungrouped board, using the configured
    /// grouped probability, and start a session on it.
    pub fn deal<G, U>(grouped: G, ungrouped: U, config: SessionConfig, rng: R) -> Result<Self>
    where
        G: BoardSource,
        U: BoardSource,
    {
        let source = MixedSource::new(grouped, ungrouped)
            .with_grouped_probability(config.grouped_probability);
        Self::load(&source, config, rng)
    }

    // === Observers ===

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn terminal(&self) -> Terminal {
        self.state.terminal()
    }

    #[must_use]
    pub fn mistakes_remaining(&self) -> u8 {
        self.state.mistakes_remaining()
    }

    #[must_use]
    pub fn current_selection(&self) -> Vec<&Word> {
        self.state.current_selection()
    }

    // === Selection ===

    /// Toggle a word's selection. Returns `true` if anything changed.
    pub fn toggle_selection(&mut self, text: &str) -> bool {
        let changed = self.state.toggle_selection(text);
        if !changed {
            if self.state.in_pool(text) {
                log::debug!("Ignored selection toggle for {text:?}: selection full or finished");
            } else {
                log::debug!("Ignored selection toggle for {text:?}: not in the pool");
            }
        }
        changed
    }

    pub fn deselect_all(&mut self) {
        self.state.deselect_all();
    }

    pub fn reshuffle(&mut self) {
        self.state.reshuffle(&mut self.rng);
    }

    // === Submission ===

    /// Judge the current selection.
    ///
    /// Returns `None` without touching state if the selection is not
    /// exactly four words or the session is already finished.
    pub fn submit(&mut self) -> Option<SubmitResult> {
        if self.state.is_finished() {
            log::debug!("Rejected submission: session already finished");
            return None;
        }

        let Some(guess) = self.state.selection_as_guess() else {
            log::debug!(
                "Rejected submission: {} words selected",
                self.state.selected_count()
            );
            return None;
        };

        let judgment = evaluate(&self.state, guess, &mut self.rng);
        let (next, result) = reduce(self.state.clone(), judgment);
        self.state = next;

        log::debug!(
            "Judged guess: {result} ({} mistakes left, {} groups cleared)",
            self.state.mistakes_remaining(),
            self.state.cleared().len()
        );

        match result {
            SubmitResult::Win => log::info!("Session won"),
            SubmitResult::Loss => {
                log::info!("Session lost");
                self.reveal = Some(RevealQueue::begin(&mut self.state, self.config.reveal_pacing));
            }
            _ => {}
        }

        Some(result)
    }

    // === Endgame ===

    /// Whether a post-loss reveal still has steps pending.
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.reveal.as_ref().is_some_and(|queue| !queue.is_empty())
    }

    /// Apply the next post-loss reveal step, if any.
    pub fn advance_reveal(&mut self) -> Option<RevealStep> {
        let queue = self.reveal.as_mut()?;
        let step = queue.advance(&mut self.state);
        if step.is_none() {
            self.reveal = None;
        }
        step
    }

    /// Apply every pending reveal step at once. Returns how many were applied.
    pub fn finish_reveal(&mut self) -> usize {
        std::iter::from_fn(|| self.advance_reveal()).count()
    }

    /// Cleared groups in player-facing form.
    #[must_use]
    pub fn display_groups(&self) -> Vec<DisplayGroup> {
        display_groups(&self.state, self.meta_guess.as_ref())
    }

    /// Record the player's grouped/ungrouped prediction.
    ///
    /// Only accepted once the session is finished. A later call replaces
    /// the earlier guess.
    pub fn submit_meta_guess(&mut self, guess: BoardKind) -> Option<MetaGuess> {
        let meta = record_meta_guess(&self.state, guess)?;
        log::info!(
            "Meta-guess {} against actual {}: {}",
            meta.guess,
            meta.actual,
            if meta.is_correct() { "correct" } else { "wrong" }
        );
        self.meta_guess = Some(meta);
        Some(meta)
    }

    #[must_use]
    pub fn meta_guess(&self) -> Option<MetaGuess> {
        self.meta_guess
    }

    /// The board kind, once the meta-guess has revealed it.
    #[must_use]
    pub fn revealed_kind(&self) -> Option<BoardKind> {
        self.meta_guess.map(|meta| meta.actual)
    }

    #[must_use]
    pub fn recap(&self) -> Recap {
        Recap::from_state(&self.state, self.config.effective_budget())
    }
}
