//! Board Source boundary.
//!
//! Boards come in two shapes, grouped and ungrouped, and are validated
//! once at load time. Nothing in a running session re-checks them.

pub mod format;
pub mod layout;
pub mod source;

pub use format::{parse_board, ArchivedAnswer, ArchivedPuzzle, BoardSpec, CategorySpec};
pub use layout::{Board, BoardKind, Layout};
pub use source::{BoardSource, MixedSource, PuzzleArchive, WordBank};
