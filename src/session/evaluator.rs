//! Guess Evaluator: maps a four-word guess to a symbolic judgment.
//!
//! The evaluator never mutates the session. It dispatches on the board's
//! layout:
//!
//! - **Grouped**: deterministic. The category sharing the most words with
//!   the guess decides the verdict (4 = correct, 3 = one away, else
//!   incorrect). Ties go to the earliest category in load order.
//! - **Ungrouped**: randomized. With exactly four words left the guess is
//!   forced correct. Otherwise a uniform draw picks incorrect, one away or
//!   correct in equal thirds, and every such judgment is charged a mistake.
//!
//! A guess equal to any earlier guess is judged [`Judgment::Same`] before
//! anything else, without consuming randomness. This includes the final
//! four on an ungrouped board: if that set was already judged, it stays
//! `Same`.

use crate::board::Layout;
use crate::core::{Category, RandomSource, GROUP_SIZE};

use super::state::{Guess, SessionState};

/// Label of a judged guess, before the reducer decides win or loss.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The guess matches this (real or synthetic) category.
    Correct(Category),
    OneAway,
    Incorrect,
}

/// Evaluator output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Judgment {
    /// Repeat of an earlier guess. No history append, no charge.
    Same,
    /// A fresh guess to be recorded.
    Judged {
        guess: Guess,
        verdict: Verdict,
        /// Whether this judgment costs a mistake.
        charged: bool,
    },
}

const ONE_AWAY_DRAW: f64 = 1.0 / 3.0;
const CORRECT_DRAW: f64 = 2.0 / 3.0;

/// Judge a guess against the session.
///
/// Randomness is only consumed for non-duplicate guesses on ungrouped boards.
pub fn evaluate<R: RandomSource>(state: &SessionState, guess: Guess, rng: &mut R) -> Judgment {
    if state.history().iter().any(|previous| *previous == guess) {
        return Judgment::Same;
    }

    let (verdict, charged) = match state.board().layout() {
        Layout::Grouped(categories) => {
            let verdict = judge_grouped(categories, &guess);
            let charged = !matches!(verdict, Verdict::Correct(_));
            (verdict, charged)
        }
        Layout::Ungrouped(_) => judge_ungrouped(state, &guess, rng),
    };

    Judgment::Judged { guess, verdict, charged }
}

/// Likeness-based verdict for a grouped board.
#[must_use]
pub fn judge_grouped(categories: &[Category], guess: &Guess) -> Verdict {
    let mut best: Option<(&Category, usize)> = None;

    for category in categories {
        let likeness = category.likeness(guess.words());
        if best.map_or(true, |(_, score)| likeness > score) {
            best = Some((category, likeness));
        }
    }

    match best {
        Some((category, score)) if score == GROUP_SIZE => Verdict::Correct(category.clone()),
        Some((_, score)) if score == GROUP_SIZE - 1 => Verdict::OneAway,
        _ => Verdict::Incorrect,
    }
}

fn judge_ungrouped<R: RandomSource>(
    state: &SessionState,
    guess: &Guess,
    rng: &mut R,
) -> (Verdict, bool) {
    let cleared = state.cleared().len();

    if state.pool().len() == GROUP_SIZE {
        let category = Category::synthetic(guess.words(), cleared, &rng.token());
        return (Verdict::Correct(category), false);
    }

    let draw = rng.unit();
    let verdict = if draw < ONE_AWAY_DRAW {
        Verdict::Incorrect
    } else if draw < CORRECT_DRAW {
        Verdict::OneAway
    } else {
        Verdict::Correct(Category::synthetic(guess.words(), cleared, &rng.token()))
    };

    (verdict, true)
}
