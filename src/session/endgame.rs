//! Endgame Sequencer: post-terminal reveal and the meta-guess.
//!
//! On a loss the remaining real categories are revealed one at a time.
//! Each step is paced for the caller to animate but has no effect on the
//! outcome, which is already decided. Dropping the queue (for example when
//! the player abandons the board) cancels the remaining steps.
//!
//! Category labels stay obscured in the player-facing display until the
//! meta-guess has been made and the board turned out to be grouped.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::BoardKind;
use crate::core::{Category, DifficultyLevel, Members};

use super::state::SessionState;

/// One paced reveal step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealStep {
    /// The category just moved into the cleared groups.
    pub category: Category,
    /// How long the caller should wait before showing this step.
    pub delay: Duration,
    /// Steps still pending after this one.
    pub remaining: usize,
}

/// Categories left to reveal after a loss.
#[derive(Clone, Debug, Default)]
pub struct RevealQueue {
    pending: VecDeque<Category>,
    pacing: Duration,
}

impl RevealQueue {
    /// Deselect everything and queue every un-cleared real category, in
    /// load order. Ungrouped boards queue nothing.
    pub fn begin(state: &mut SessionState, pacing: Duration) -> Self {
        state.deselect_all();

        let pending: VecDeque<Category> = state
            .board()
            .categories()
            .iter()
            .filter(|c| !state.cleared().iter().any(|cleared| cleared == *c))
            .cloned()
            .collect();

        log::debug!("Queued {} categories for reveal", pending.len());
        Self { pending, pacing }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Reveal the next category, moving its words out of the pool.
    pub fn advance(&mut self, state: &mut SessionState) -> Option<RevealStep> {
        let category = self.pending.pop_front()?;
        state.clear_category(category.clone());
        Some(RevealStep {
            category,
            delay: self.pacing,
            remaining: self.pending.len(),
        })
    }
}

/// The player's post-game prediction and the truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaGuess {
    pub guess: BoardKind,
    pub actual: BoardKind,
}

impl MetaGuess {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.guess == self.actual
    }
}

/// Record a meta-guess. Returns `None` while the session is in progress.
#[must_use]
pub fn record_meta_guess(state: &SessionState, guess: BoardKind) -> Option<MetaGuess> {
    if !state.is_finished() {
        return None;
    }
    Some(MetaGuess {
        guess,
        actual: state.board_kind(),
    })
}

/// A cleared group as shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayGroup {
    pub label: String,
    pub members: Members,
    pub level: DifficultyLevel,
    pub obscured: bool,
}

/// Cleared groups in display form.
///
/// Labels are replaced by `?<n>` placeholders unless a meta-guess has been
/// made on a grouped board.
#[must_use]
pub fn display_groups(state: &SessionState, meta: Option<&MetaGuess>) -> Vec<DisplayGroup> {
    let reveal = meta.is_some() && state.board_kind() == BoardKind::Grouped;

    state
        .cleared()
        .iter()
        .enumerate()
        .map(|(index, category)| DisplayGroup {
            label: if reveal {
                category.label.clone()
            } else {
                format!("?{}", index + 1)
            },
            members: category.members.clone(),
            level: category.level,
            obscured: !reveal,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::session::state::Terminal;

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

    fn lost_state_with_a_cleared() -> SessionState {
        let board = board();
        let first = board.categories()[0].clone();
        let mut state = SessionState::new(board, 4);
        state.clear_category(first);
        state.toggle_selection("b1");
        state.terminal = Terminal::Lost;
        state
    }

    #[test]
    fn test_reveal_queue_skips_cleared() {
        let mut state = lost_state_with_a_cleared();
        let queue = RevealQueue::begin(&mut state, Duration::from_millis(10));

        assert_eq!(queue.len(), 3);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_reveal_steps_in_order() {
        let mut state = lost_state_with_a_cleared();
        let mut queue = RevealQueue::begin(&mut state, Duration::from_millis(10));

        let labels: Vec<String> = std::iter::from_fn(|| queue.advance(&mut state))
            .map(|step| {
                assert_eq!(step.delay, Duration::from_millis(10));
                step.category.label
            })
            .collect();

        assert_eq!(labels, vec!["B", "C", "D"]);
        assert!(state.pool().is_empty());
        assert_eq!(state.cleared().len(), 4);
        assert!(queue.advance(&mut state).is_none());
    }

    #[test]
    fn test_ungrouped_reveals_nothing() {
        let words: Vec<String> = (0..16).map(|i| format!("w{i}")).collect();
        let mut state = SessionState::new(Board::ungrouped(words).unwrap(), 4);
        state.terminal = Terminal::Lost;

        let queue = RevealQueue::begin(&mut state, Duration::ZERO);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_meta_guess_requires_finished_session() {
        let mut state = SessionState::new(board(), 4);
        assert!(record_meta_guess(&state, BoardKind::Grouped).is_none());

        state.terminal = Terminal::Won;
        let meta = record_meta_guess(&state, BoardKind::Ungrouped).unwrap();
        assert_eq!(meta.actual, BoardKind::Grouped);
        assert!(!meta.is_correct());
    }

    #[test]
    fn test_display_obscures_until_meta_guess() {
        let state = lost_state_with_a_cleared();

        let hidden = display_groups(&state, None);
        assert_eq!(hidden[0].label, "?1");
        assert!(hidden[0].obscured);

        let meta = record_meta_guess(&state, BoardKind::Grouped).unwrap();
        let shown = display_groups(&state, Some(&meta));
        assert_eq!(shown[0].label, "A");
        assert!(!shown[0].obscured);
    }

    #[test]
    fn test_display_stays_obscured_for_ungrouped() {
        let words: Vec<String> = (0..16).map(|i| format!("w{i}")).collect();
        let mut state = SessionState::new(Board::ungrouped(words).unwrap(), 4);
        state.clear_category(Category::synthetic(["w0", "w1", "w2", "w3"], 0, "abc123"));
        state.terminal = Terminal::Won;

        let meta = record_meta_guess(&state, BoardKind::Ungrouped).unwrap();
        assert!(meta.is_correct());

        let shown = display_groups(&state, Some(&meta));
        assert_eq!(shown[0].label, "?1");
        assert!(shown[0].obscured);
    }
}
