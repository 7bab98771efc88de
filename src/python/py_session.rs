//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::{parse_board, BoardKind, PuzzleArchive, WordBank};
use crate::core::{GameRng, LoadError, SessionConfig};
use crate::session::{PuzzleSession, RevealStep};

fn config(mistake_budget: u8, reveal_pacing_ms: u64) -> SessionConfig {
    SessionConfig::new()
        .with_mistake_budget(mistake_budget)
        .with_reveal_pacing(std::time::Duration::from_millis(reveal_pacing_ms))
}

fn value_error(err: LoadError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn rng(seed: Option<u64>) -> GameRng {
    seed.map_or_else(GameRng::from_entropy, GameRng::new)
}

/// Python wrapper for a post-loss reveal step.
#[pyclass(name = "RevealStep")]
#[derive(Clone, Debug)]
pub struct PyRevealStep(pub RevealStep);

#[pymethods]
impl PyRevealStep {
    #[getter]
    fn label(&self) -> String {
        self.0.category.label.clone()
    }

    #[getter]
    fn members(&self) -> Vec<String> {
        self.0.category.members.to_vec()
    }

    #[getter]
    fn level(&self) -> u8 {
        self.0.category.level.get()
    }

    /// Seconds to wait before showing this step.
    #[getter]
    fn delay(&self) -> f64 {
        self.0.delay.as_secs_f64()
    }

    #[getter]
    fn remaining(&self) -> usize {
        self.0.remaining
    }

    fn __repr__(&self) -> String {
        format!("RevealStep(label={:?}, remaining={})", self.0.category.label, self.0.remaining)
    }
}

/// Python wrapper for PuzzleSession.
#[pyclass(name = "PuzzleSession")]
pub struct PyPuzzleSession {
    inner: PuzzleSession<GameRng>,
}

#[pymethods]
impl PyPuzzleSession {
    /// Start a session on a board spec.
    ///
    /// # Arguments
    /// - board_json: `{"kind": "grouped", ...}` or `{"kind": "ungrouped", ...}`
    /// - seed: RNG seed; entropy-seeded if omitted
    /// - mistake_budget: Mistakes allowed before loss
    /// - reveal_pacing_ms: Delay between post-loss reveal steps
    #[new]
    #[pyo3(signature = (board_json, seed = None, mistake_budget = 4, reveal_pacing_ms = 1000))]
    fn new(
        board_json: &str,
        seed: Option<u64>,
        mistake_budget: u8,
        reveal_pacing_ms: u64,
    ) -> PyResult<Self> {
        let board = parse_board(board_json).map_err(value_error)?;
        Ok(Self {
            inner: PuzzleSession::new(board, config(mistake_budget, reveal_pacing_ms), rng(seed)),
        })
    }

    /// Deal a hidden grouped-or-ungrouped board from an archive and a word list.
    #[staticmethod]
    #[pyo3(signature = (
        archive_json,
        words,
        seed = None,
        grouped_probability = 0.5,
        mistake_budget = 4
    ))]
    fn deal(
        archive_json: &str,
        words: Vec<String>,
        seed: Option<u64>,
        grouped_probability: f64,
        mistake_budget: u8,
    ) -> PyResult<Self> {
        let archive = PuzzleArchive::from_json(archive_json).map_err(value_error)?;
        let bank = WordBank::new(words).map_err(value_error)?;
        let config = config(mistake_budget, 1000).with_grouped_probability(grouped_probability);

        let inner = PuzzleSession::deal(archive, bank, config, rng(seed)).map_err(value_error)?;
        Ok(Self { inner })
    }

    fn toggle_selection(&mut self, word: &str) -> bool {
        self.inner.toggle_selection(word)
    }

    fn deselect_all(&mut self) {
        self.inner.deselect_all();
    }

    fn reshuffle(&mut self) {
        self.inner.reshuffle();
    }

    /// Submit the current selection.
    ///
    /// Returns the outcome name, or None if the submission was rejected.
    fn submit(&mut self) -> Option<&'static str> {
        self.inner.submit().map(|result| result.as_str())
    }

    fn advance_reveal(&mut self) -> Option<PyRevealStep> {
        self.inner.advance_reveal().map(PyRevealStep)
    }

    /// Record the meta-guess ("grouped" or "ungrouped").
    ///
    /// Returns whether it was correct, or None while the game is running.
    fn submit_meta_guess(&mut self, guess: &str) -> PyResult<Option<bool>> {
        let kind: BoardKind = guess.parse().map_err(PyValueError::new_err)?;
        Ok(self.inner.submit_meta_guess(kind).map(|meta| meta.is_correct()))
    }

    /// Active pool as (word, selected) pairs in display order.
    #[getter]
    fn pool(&self) -> Vec<(String, bool)> {
        self.inner
            .state()
            .pool()
            .iter()
            .map(|w| (w.text.clone(), w.selected))
            .collect()
    }

    #[getter]
    fn selection(&self) -> Vec<String> {
        self.inner.current_selection().iter().map(|w| w.text.clone()).collect()
    }

    /// Cleared groups as (label, members, level), labels obscured until revealed.
    #[getter]
    fn cleared_groups(&self) -> Vec<(String, Vec<String>, u8)> {
        self.inner
            .display_groups()
            .into_iter()
            .map(|g| (g.label, g.members.to_vec(), g.level.get()))
            .collect()
    }

    #[getter]
    fn mistakes_remaining(&self) -> u8 {
        self.inner.mistakes_remaining()
    }

    #[getter]
    fn terminal(&self) -> &'static str {
        match self.inner.terminal() {
            crate::session::Terminal::InProgress => "in-progress",
            crate::session::Terminal::Won => "won",
            crate::session::Terminal::Lost => "lost",
        }
    }

    #[getter]
    fn actual_kind(&self) -> Option<&'static str> {
        self.inner.revealed_kind().map(BoardKind::as_str)
    }

    #[getter]
    fn guess_history(&self) -> Vec<Vec<String>> {
        self.inner
            .state()
            .history()
            .iter()
            .map(|g| g.words().map(str::to_string).collect())
            .collect()
    }

    fn recap_grid(&self) -> String {
        self.inner.recap().to_grid()
    }

    /// Recap rows as (words, uniform) pairs, where `uniform` marks a guess
    /// whose words all share one difficulty level.
    fn recap_rows(&self) -> Vec<(Vec<String>, bool)> {
        self.inner
            .recap()
            .rows
            .iter()
            .map(|row| {
                let words = row.words.iter().map(|(word, _)| word.clone()).collect();
                (words, row.is_uniform())
            })
            .collect()
    }

    /// Rating message once the session is finished.
    #[getter]
    fn perfection(&self) -> Option<&'static str> {
        self.inner.recap().perfection.map(|p| p.message())
    }

    fn __repr__(&self) -> String {
        format!(
            "PuzzleSession(words={}, mistakes_remaining={}, status={})",
            self.inner.state().pool().len(),
            self.inner.mistakes_remaining(),
            self.terminal()
        )
    }
}
