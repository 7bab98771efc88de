//! Endgame tests: post-loss reveal, meta-guess, label display and recap.

use std::time::Duration;

use rust_connections::board::{Board, BoardKind};
use rust_connections::core::{Category, DifficultyLevel, GameRng, SessionConfig};
use rust_connections::session::{Perfection, PuzzleSession, SubmitResult, Terminal};

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

fn session(config: SessionConfig) -> PuzzleSession {
    PuzzleSession::new(board(), config, GameRng::new(99))
}

fn submit(session: &mut PuzzleSession, words: [&str; 4]) -> Option<SubmitResult> {
    session.deselect_all();
    for word in words {
        session.toggle_selection(word);
    }
    session.submit()
}

fn win(session: &mut PuzzleSession) {
    for prefix in ["a", "b", "c", "d"] {
        let words: Vec<String> = (1..=4).map(|n| format!("{prefix}{n}")).collect();
        submit(
            session,
            [words[0].as_str(), words[1].as_str(), words[2].as_str(), words[3].as_str()],
        );
    }
    assert_eq!(session.terminal(), Terminal::Won);
}

/// Lose after clearing the "A" group.
fn lose_after_one_group() -> PuzzleSession {
    let config = SessionConfig::new().with_reveal_pacing(Duration::from_millis(250));
    let mut session = session(config);

    assert_eq!(submit(&mut session, ["a1", "a2", "a3", "a4"]), Some(SubmitResult::Correct));
    submit(&mut session, ["b1", "c1", "d1", "b2"]);
    submit(&mut session, ["b1", "c1", "d1", "c2"]);
    submit(&mut session, ["b1", "c1", "d1", "d2"]);
    assert_eq!(submit(&mut session, ["b3", "c3", "d3", "b4"]), Some(SubmitResult::Loss));
    session
}

// === Reveal ===

#[test]
fn test_loss_reveals_remaining_groups_in_order() {
    let mut session = lose_after_one_group();

    assert!(session.is_revealing());
    assert_eq!(session.state().cleared().len(), 1);

    let first = session.advance_reveal().unwrap();
    assert_eq!(first.category.label, "B");
    assert_eq!(first.delay, Duration::from_millis(250));
    assert_eq!(first.remaining, 2);
    assert_eq!(session.state().pool().len(), 8);

    let rest: Vec<String> = std::iter::from_fn(|| session.advance_reveal())
        .map(|step| step.category.label)
        .collect();
    assert_eq!(rest, vec!["C", "D"]);

    assert!(!session.is_revealing());
    assert!(session.state().pool().is_empty());
    assert_eq!(session.terminal(), Terminal::Lost);
    assert!(session.advance_reveal().is_none());
}

#[test]
fn test_win_has_no_reveal() {
    let mut session = session(SessionConfig::default());
    win(&mut session);

    assert!(!session.is_revealing());
    assert!(session.advance_reveal().is_none());
}

#[test]
fn test_reveal_does_not_change_outcome() {
    let mut session = lose_after_one_group();
    session.finish_reveal();

    assert_eq!(session.terminal(), Terminal::Lost);
    assert_eq!(session.mistakes_remaining(), 0);
    assert_eq!(session.state().cleared().len(), 4);
}

// === Meta-guess and labels ===

#[test]
fn test_meta_guess_rejected_mid_game() {
    let mut session = session(SessionConfig::default());
    submit(&mut session, ["a1", "a2", "a3", "a4"]);

    assert!(session.submit_meta_guess(BoardKind::Grouped).is_none());
    assert!(session.meta_guess().is_none());
}

#[test]
fn test_labels_hidden_until_meta_guess() {
    let mut session = session(SessionConfig::default());
    win(&mut session);

    let hidden: Vec<String> = session.display_groups().into_iter().map(|g| g.label).collect();
    assert_eq!(hidden, vec!["?1", "?2", "?3", "?4"]);

    let meta = session.submit_meta_guess(BoardKind::Ungrouped).unwrap();
    assert!(!meta.is_correct());
    assert_eq!(meta.actual, BoardKind::Grouped);

    let shown: Vec<String> = session.display_groups().into_iter().map(|g| g.label).collect();
    assert_eq!(shown, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_second_meta_guess_overwrites_first() {
    let mut session = lose_after_one_group();

    assert!(!session.submit_meta_guess(BoardKind::Ungrouped).unwrap().is_correct());
    assert!(session.submit_meta_guess(BoardKind::Grouped).unwrap().is_correct());
    assert_eq!(session.meta_guess().map(|m| m.guess), Some(BoardKind::Grouped));
}

#[test]
fn test_display_keeps_levels_and_members() {
    let mut session = lose_after_one_group();
    session.finish_reveal();

    let groups = session.display_groups();
    assert!(groups.iter().all(|g| g.obscured));
    let levels: Vec<u8> = groups.iter().map(|g| g.level.get()).collect();
    assert_eq!(levels, vec![1, 2, 3, 4]);
    assert_eq!(groups[0].members.as_slice(), ["a1", "a2", "a3", "a4"]);
}

// === Recap ===

#[test]
fn test_recap_after_clean_win() {
    let mut session = session(SessionConfig::default());
    win(&mut session);

    let recap = session.recap();
    assert_eq!(recap.perfection, Some(Perfection::Perfect));
    assert_eq!(recap.rows.len(), 4);
    assert!(recap.rows.iter().all(|row| row.is_uniform()));
    let grid = ["🟨🟨🟨🟨", "🟩🟩🟩🟩", "🟦🟦🟦🟦", "🟪🟪🟪🟪"].join("\n");
    assert_eq!(recap.to_grid(), grid);
}

#[test]
fn test_recap_rates_mistakes() {
    let mut session = session(SessionConfig::default());
    submit(&mut session, ["a1", "a2", "a3", "b1"]);
    submit(&mut session, ["a1", "a2", "b1", "b2"]);
    win(&mut session);

    let recap = session.recap();
    assert_eq!(recap.mistakes_remaining, 2);
    assert_eq!(recap.perfection, Some(Perfection::Solid));
    assert_eq!(recap.rows.len(), 6);
    assert!(!recap.rows[0].is_uniform());
}

#[test]
fn test_recap_rates_against_configured_budget() {
    let mut generous = session(SessionConfig::new().with_mistake_budget(6));
    submit(&mut generous, ["a1", "a2", "a3", "b1"]);
    submit(&mut generous, ["a1", "a2", "b1", "b2"]);
    win(&mut generous);

    let recap = generous.recap();
    assert_eq!(recap.mistakes_remaining, 4);
    assert_eq!(recap.mistakes_made, 2);
    assert_eq!(recap.perfection, Some(Perfection::Solid));

    let mut strict = session(SessionConfig::new().with_mistake_budget(2));
    win(&mut strict);
    assert_eq!(strict.recap().perfection, Some(Perfection::Perfect));
}

#[test]
fn test_recap_after_loss() {
    let session = lose_after_one_group();
    let recap = session.recap();

    assert_eq!(recap.terminal, Terminal::Lost);
    assert_eq!(recap.perfection.map(Perfection::message), Some("Next time!"));
    assert_eq!(recap.rows.len(), 5);
}

#[test]
fn test_recap_in_progress_has_no_rating() {
    let mut session = session(SessionConfig::default());
    submit(&mut session, ["a1", "b1", "c1", "d1"]);

    let recap = session.recap();
    assert_eq!(recap.perfection, None);
    assert_eq!(recap.to_grid().chars().count(), 4);
}
