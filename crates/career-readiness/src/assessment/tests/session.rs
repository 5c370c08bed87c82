use super::common::*;

use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::{AnswerError, AnswerValue};
use crate::assessment::scoring::Recommendation;
use crate::assessment::session::{SessionError, SessionEvent, SessionState};

fn answer(value: impl Into<AnswerValue>, seconds: i64) -> SessionEvent {
    SessionEvent::Answer {
        value: value.into(),
        at: later(seconds),
    }
}

fn next(seconds: i64) -> SessionEvent {
    SessionEvent::Next { at: later(seconds) }
}

/// Answer and advance through `entries`, ten seconds per question.
fn walk(catalog: &QuestionCatalog, entries: &[(&str, AnswerValue)]) -> SessionState {
    let mut state = SessionState::start(started());
    for (offset, (_, value)) in entries.iter().enumerate() {
        let seconds = offset as i64 * 10;
        state = state
            .apply(catalog, answer(value.clone(), seconds))
            .expect("answer accepted");
        state = state
            .apply(catalog, next(seconds + 5))
            .expect("advance accepted");
    }
    state
}

#[test]
fn fresh_session_starts_on_first_question() {
    let catalog = QuestionCatalog::standard();
    let state = SessionState::start(started());

    assert_eq!(state.current_index(), 0);
    assert_eq!(
        state.current_question(&catalog).map(|question| question.id),
        Some("psych_1")
    );
    assert!(!state.can_proceed(&catalog));
    assert!(!state.is_complete());
    assert!(state.snapshot().is_none());
    assert_eq!(state.section_label(&catalog), Some("Psychological Assessment"));
    assert!((state.progress_pct(&catalog) - 100.0 / 18.0).abs() < 1e-9);
}

#[test]
fn advancing_requires_an_answer() {
    let catalog = QuestionCatalog::standard();
    let state = SessionState::start(started());

    assert_eq!(
        state.apply(&catalog, next(1)),
        Err(SessionError::AnswerRequired {
            question_id: "psych_1"
        })
    );
}

#[test]
fn rejects_answers_that_do_not_fit_the_question() {
    let catalog = QuestionCatalog::standard();
    let state = SessionState::start(started());

    let error = state
        .apply(&catalog, answer(9u8, 1))
        .expect_err("rating out of range");
    assert!(matches!(
        error,
        SessionError::InvalidAnswer(AnswerError::OutOfRange {
            question_id: "psych_1",
            min: 1,
            max: 5,
            ..
        })
    ));

    let error = state
        .apply(&catalog, answer("Zendesk", 1))
        .expect_err("text on a likert item");
    assert!(matches!(
        error,
        SessionError::InvalidAnswer(AnswerError::ExpectedNumber { .. })
    ));
}

#[test]
fn answering_again_replaces_the_previous_answer() {
    let catalog = QuestionCatalog::standard();
    let state = SessionState::start(started())
        .apply(&catalog, answer(4u8, 1))
        .and_then(|state| state.apply(&catalog, answer(2u8, 2)))
        .expect("answers accepted");

    assert_eq!(state.data().answers.len(), 1);
    assert_eq!(state.data().answers[0].value, AnswerValue::Number(2.0));
    assert_eq!(state.data().answers[0].timestamp, later(2));
    assert!(state.can_proceed(&catalog));
}

#[test]
fn apply_leaves_the_previous_state_untouched() {
    let catalog = QuestionCatalog::standard();
    let before = SessionState::start(started());
    let after = before
        .apply(&catalog, answer(3u8, 1))
        .expect("answer accepted");

    assert!(before.data().answers.is_empty());
    assert_eq!(after.data().answers.len(), 1);
}

#[test]
fn previous_stops_at_the_first_question_and_keeps_answers() {
    let catalog = QuestionCatalog::standard();
    let state = SessionState::start(started())
        .apply(&catalog, SessionEvent::Previous)
        .expect("previous at start is a no-op");
    assert_eq!(state.current_index(), 0);

    let state = state
        .apply(&catalog, answer(5u8, 1))
        .and_then(|state| state.apply(&catalog, next(2)))
        .and_then(|state| state.apply(&catalog, SessionEvent::Previous))
        .expect("navigation accepted");
    assert_eq!(state.current_index(), 0);
    assert_eq!(
        state.current_answer(&catalog).map(|answer| answer.value.clone()),
        Some(AnswerValue::Number(5.0))
    );
}

#[test]
fn sections_complete_when_their_last_question_is_passed() {
    let catalog = QuestionCatalog::standard();
    let entries = strongest_entries();

    let state = walk(&catalog, &entries[..15]);
    assert!(state.data().completed_sections.is_empty());
    assert_eq!(state.section_label(&catalog), Some("Psychological Assessment"));

    let state = walk(&catalog, &entries[..16]);
    assert_eq!(state.data().completed_sections, vec!["psychometric"]);
    assert_eq!(state.section_label(&catalog), Some("Technical Assessment"));
}

#[test]
fn passing_the_last_question_freezes_the_snapshot() {
    let catalog = QuestionCatalog::standard();
    let state = walk(&catalog, &strongest_entries());

    assert!(state.is_complete());
    assert!(!state.can_proceed(&catalog));
    let snapshot = state.snapshot().expect("snapshot available");
    assert_eq!(snapshot.answers.len(), 18);
    assert_eq!(snapshot.time_spent, 175_000);
    assert_eq!(
        snapshot.completed_sections,
        vec!["psychometric", "technical", "wiscar"]
    );

    assert_eq!(
        state.apply(&catalog, answer(1u8, 200)),
        Err(SessionError::AlreadyCompleted)
    );
    assert_eq!(
        state.apply(&catalog, SessionEvent::Previous),
        Err(SessionError::AlreadyCompleted)
    );

    let result = engine().score(&snapshot.answers);
    assert_eq!(result.recommendation, Recommendation::Yes);
}

#[test]
fn restart_discards_progress() {
    let catalog = QuestionCatalog::standard();
    let state = walk(&catalog, &strongest_entries());
    let restarted = state
        .apply(&catalog, SessionEvent::Restart { at: later(500) })
        .expect("restart always allowed");

    assert_eq!(restarted, SessionState::start(later(500)));
    assert!(restarted.data().answers.is_empty());
}

#[test]
fn remaining_time_counts_down_to_one_minute() {
    let catalog = QuestionCatalog::standard();
    let state = SessionState::start(started());
    // 17 questions after the first, 1.5 minutes each
    assert_eq!(state.estimated_minutes_remaining(&catalog), 26);

    let entries = strongest_entries();
    let state = walk(&catalog, &entries[..16]);
    assert_eq!(state.estimated_minutes_remaining(&catalog), 2);

    let state = walk(&catalog, &entries[..17]);
    assert_eq!(state.current_index(), 17);
    assert_eq!(state.estimated_minutes_remaining(&catalog), 1);
}
