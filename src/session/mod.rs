//! Puzzle Session Engine.
//!
//! - `state`: Session State and the selection API
//! - `evaluator`: Guess Evaluator (grouped likeness, ungrouped randomized policy)
//! - `reducer`: Outcome Reducer (mistakes, clears, win/loss)
//! - `endgame`: Endgame Sequencer (paced loss reveal, display form, meta-guess)
//! - `recap`: post-game results
//! - `puzzle`: `PuzzleSession`, which drives all of the above
//!
//! The evaluator and reducer are plain functions over an explicit
//! `SessionState` value, so they can be exercised without a session.

pub mod endgame;
pub mod evaluator;
pub mod puzzle;
pub mod recap;
pub mod reducer;
pub mod state;

pub use endgame::{
    display_groups, record_meta_guess, DisplayGroup, MetaGuess, RevealQueue, RevealStep,
};
pub use evaluator::{evaluate, judge_grouped, Judgment, Verdict};
pub use puzzle::PuzzleSession;
pub use recap::{Perfection, Recap, RecapRow};
pub use reducer::{reduce, SubmitResult};
pub use state::{Guess, SessionState, Terminal};
