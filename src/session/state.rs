//! Session state and the selection API.
//!
//! ## SessionState
//!
//! The authoritative record of one puzzle session:
//! - Active pool (display order, per-word selection flag)
//! - Cleared groups (append-only, at most four)
//! - Remaining mistakes
//! - Guess history (for duplicate detection and the recap)
//! - Terminal status
//!
//! Uses `im` persistent collections so a transition can take the state
//! by value and hand back the next one without deep copies.
//!
//! ## Invariants
//!
//! - The pool and the members of all cleared groups partition the board's
//!   sixteen words.
//! - At most four pool words are selected.
//! - Once terminal, only the endgame reveal moves words out of the pool.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, BoardKind};
use crate::core::{Category, RandomSource, Word, GROUP_SIZE};

/// Session progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Terminal {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Terminal {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Terminal::Won | Terminal::Lost)
    }
}

/// A submitted set of exactly four distinct words.
///
/// Stored sorted, so two guesses compare equal exactly when they hold the
/// same words regardless of selection order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess(SmallVec<[String; GROUP_SIZE]>);

impl Guess {
    /// Build a guess. Returns `None` unless given exactly four distinct words.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: SmallVec<[String; GROUP_SIZE]> = words.into_iter().map(Into::into).collect();
        words.sort_unstable();
        words.dedup();
        (words.len() == GROUP_SIZE).then_some(Self(words))
    }

    /// Words in sorted order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| w == word)
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Authoritative record of one puzzle session.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub(crate) board: Arc<Board>,
    pub(crate) pool: Vector<Word>,
    pub(crate) cleared: Vector<Category>,
    pub(crate) mistakes_remaining: u8,
    pub(crate) history: Vector<Guess>,
    pub(crate) terminal: Terminal,
}

impl SessionState {
    /// Create a fresh state with the board's words in load order.
    #[must_use]
    pub fn new(board: impl Into<Arc<Board>>, mistake_budget: u8) -> Self {
        let board = board.into();
        let pool = board.words().into_iter().collect();
        Self {
            board,
            pool,
            cleared: Vector::new(),
            mistakes_remaining: mistake_budget.max(1),
            history: Vector::new(),
            terminal: Terminal::InProgress,
        }
    }

    // === Observers ===

    /// Words still on the grid, in display order.
    #[must_use]
    pub fn pool(&self) -> &Vector<Word> {
        &self.pool
    }

    /// Cleared groups with their true labels.
    ///
    /// Use [`display_groups`](crate::session::display_groups) for the
    /// player-facing form.
    #[must_use]
    pub fn cleared(&self) -> &Vector<Category> {
        &self.cleared
    }

    #[must_use]
    pub fn mistakes_remaining(&self) -> u8 {
        self.mistakes_remaining
    }

    /// Every judged guess, in submission order.
    #[must_use]
    pub fn history(&self) -> &Vector<Guess> {
        &self.history
    }

    #[must_use]
    pub fn terminal(&self) -> Terminal {
        self.terminal
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.terminal.is_finished()
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_kind(&self) -> BoardKind {
        self.board.kind()
    }

    /// Check whether a word is still in the pool.
    #[must_use]
    pub fn in_pool(&self, text: &str) -> bool {
        self.pool.iter().any(|w| w.text == text)
    }

    // === Selection ===

    /// Currently selected words, in display order.
    #[must_use]
    pub fn current_selection(&self) -> Vec<&Word> {
        self.pool.iter().filter(|w| w.selected).collect()
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.pool.iter().filter(|w| w.selected).count()
    }

    /// The current selection as a guess, if exactly four words are selected.
    #[must_use]
    pub fn selection_as_guess(&self) -> Option<Guess> {
        if self.selected_count() != GROUP_SIZE {
            return None;
        }
        Guess::new(self.pool.iter().filter(|w| w.selected).map(|w| w.text.as_str()))
    }

    /// Flip the selection flag on a word.
    ///
    /// Deselecting is always allowed; selecting a fifth word is refused.
    /// Unknown words and finished sessions are ignored. Returns `true` if
    /// the pool changed.
    pub fn toggle_selection(&mut self, text: &str) -> bool {
        if self.is_finished() {
            return false;
        }

        let selected = self.selected_count();
        let Some(index) = self.pool.iter().position(|w| w.text == text) else {
            return false;
        };

        let Some(word) = self.pool.get_mut(index) else {
            return false;
        };
        if !word.selected && selected >= GROUP_SIZE {
            return false;
        }

        word.selected = !word.selected;
        true
    }

    /// Clear every selection flag.
    pub fn deselect_all(&mut self) {
        for word in self.pool.iter_mut() {
            word.selected = false;
        }
    }

    /// Reorder the pool with an unbiased permutation, keeping selections.
    ///
    /// Ignored once the session is finished.
    pub fn reshuffle<R: RandomSource>(&mut self, rng: &mut R) {
        if self.is_finished() {
            return;
        }
        self.shuffle_pool(rng);
    }

    pub(crate) fn shuffle_pool<R: RandomSource>(&mut self, rng: &mut R) {
        let mut words: Vec<Word> = self.pool.iter().cloned().collect();
        rng.shuffle(&mut words);
        self.pool = words.into_iter().collect();
    }

    // === Mutation (reducer and endgame only) ===

    /// Move a category's words out of the pool and append it to the cleared groups.
    pub(crate) fn clear_category(&mut self, category: Category) {
        self.pool = self.pool.iter().filter(|w| !category.contains(&w.text)).cloned().collect();
        self.cleared.push_back(category);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DifficultyLevel, GameRng};

    fn board() -> Board {
        let categories = ["a", "b", "c", "d"]
            .iter()
            .enumerate()
            .map(|(i, prefix)| {
                Category::new(
                    prefix.to_uppercase(),
                    (1..=4).map(|n| format!("{prefix}{n}")),
                    DifficultyLevel::new(i as u8 + 1).unwrap(),
                )
            })
            .collect();
        Board::grouped(categories).unwrap()
    }

    #[test]
    fn test_new_state() {
        let state = SessionState::new(board(), 4);

        assert_eq!(state.pool().len(), 16);
        assert!(state.cleared().is_empty());
        assert_eq!(state.mistakes_remaining(), 4);
        assert_eq!(state.terminal(), Terminal::InProgress);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_toggle_caps_at_four() {
        let mut state = SessionState::new(board(), 4);

        for word in ["a1", "a2", "b1", "c1"] {
            assert!(state.toggle_selection(word));
        }
        assert!(!state.toggle_selection("d1"));
        assert_eq!(state.selected_count(), 4);

        // Deselecting is always allowed, freeing a slot.
        assert!(state.toggle_selection("a1"));
        assert!(state.toggle_selection("d1"));
        assert_eq!(state.selected_count(), 4);
    }

    #[test]
    fn test_toggle_unknown_word_is_noop() {
        let mut state = SessionState::new(board(), 4);
        assert!(!state.toggle_selection("nope"));
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_deselect_all() {
        let mut state = SessionState::new(board(), 4);
        state.toggle_selection("a1");
        state.toggle_selection("b2");

        state.deselect_all();
        assert!(state.current_selection().is_empty());
    }

    #[test]
    fn test_reshuffle_keeps_selection() {
        let mut state = SessionState::new(board(), 4);
        state.toggle_selection("c3");
        let before: Vec<String> = state.pool().iter().map(|w| w.text.clone()).collect();

        state.reshuffle(&mut GameRng::new(42));

        let after: Vec<String> = state.pool().iter().map(|w| w.text.clone()).collect();
        assert_ne!(before, after);
        let mut sorted_before = before.clone();
        let mut sorted_after = after.clone();
        sorted_before.sort();
        sorted_after.sort();
        assert_eq!(sorted_before, sorted_after);

        let selected: Vec<&str> =
            state.current_selection().iter().map(|w| w.text.as_str()).collect();
        assert_eq!(selected, vec!["c3"]);
    }

    #[test]
    fn test_guess_is_order_independent() {
        let one = Guess::new(["d", "a", "c", "b"]).unwrap();
        let two = Guess::new(["a", "b", "c", "d"]).unwrap();
        assert_eq!(one, two);
        assert_eq!(one.to_string(), "[a, b, c, d]");
    }

    #[test]
    fn test_guess_requires_four_distinct() {
        assert!(Guess::new(["a", "b", "c"]).is_none());
        assert!(Guess::new(["a", "b", "c", "c"]).is_none());
        assert!(Guess::new(["a", "b", "c", "d", "e"]).is_none());
    }

    #[test]
    fn test_selection_as_guess() {
        let mut state = SessionState::new(board(), 4);
        for word in ["a1", "a2", "a3"] {
            state.toggle_selection(word);
        }
        assert!(state.selection_as_guess().is_none());

        state.toggle_selection("a4");
        let guess = state.selection_as_guess().unwrap();
        assert!(guess.contains("a4"));
    }

    #[test]
    fn test_clear_category() {
        let board = board();
        let category = board.categories()[1].clone();
        let mut state = SessionState::new(board, 4);

        state.clear_category(category);

        assert_eq!(state.pool().len(), 12);
        assert_eq!(state.cleared().len(), 1);
        assert!(!state.in_pool("b1"));
    }
}
