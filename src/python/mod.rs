//! Python bindings for the rust-connections puzzle engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_connections as rc
//!
//! session = rc.PuzzleSession(board_json, seed=42)
//! for word in ["bass", "pike", "sole", "carp"]:
//!     session.toggle_selection(word)
//!
//! result = session.submit()   # "correct", "one-away", ... or None
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// rust-connections: a word-grouping puzzle session engine.
#[pymodule]
fn rust_connections(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPuzzleSession>()?;
    m.add_class::<PyRevealStep>()?;
    Ok(())
}
