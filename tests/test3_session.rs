use rusty_round::{MAX_STROKES, MIN_STROKES, RoundSession};

mod common;

#[test]
fn test3_full_lifecycle() {
    let course = common::course_with_pars("c", "Three", &[4, 3, 5]);
    let mut session = RoundSession::new();
    assert!(!session.is_active());

    assert!(session.start(&course).is_none());
    assert!(session.score_hole(0, 5));
    assert!(session.score_par(1));
    assert!(session.add_stroke(2));

    let before = session.current_round().map(|r| r.holes_played());
    let round = session.complete().expect("active round");
    assert_eq!(Some(round.holes_played()), before);
    assert_eq!(round.total_score(), 5 + 3 + 6);
    assert!(round.is_complete());
    assert!(round.end_time().is_some());
    assert!(!session.is_active());
}

#[test]
fn test3_handles_follow_the_round() {
    let course = common::course_with_pars("c", "Three", &[4, 3, 5]);
    let mut session = RoundSession::new();
    session.start(&course);

    let handles = session.handles().to_vec();
    assert_eq!(handles.len(), 3);
    assert!(handles[2].set(&mut session, 7));
    assert_eq!(handles[2].get(&session), Some(7));
    assert_eq!(session.current_round().map(|r| r.holes_played()), Some(1));

    session.abandon();
    assert!(handles.iter().all(|h| h.get(&session).is_none()));
    assert!(session.handles().is_empty());
}

#[test]
fn test3_restart_replaces_and_returns_previous() {
    let first = common::course_with_pars("a", "First", &[4, 4]);
    let second = common::course_with_pars("b", "Second", &[3]);
    let mut session = RoundSession::new();
    session.start(&first);
    session.score_hole(1, 6);

    let displaced = session.start(&second).expect("previous round handed back");
    assert_eq!(displaced.course_name(), "First");
    assert_eq!(displaced.total_score(), 6);
    assert_eq!(
        session.current_course().map(|c| c.name().to_string()),
        Some("Second".to_string())
    );
    assert_eq!(session.current_round().map(|r| r.holes_played()), Some(0));
}

#[test]
fn test3_stroke_bounds() {
    let course = common::course_with_pars("c", "One", &[MAX_STROKES]);
    let mut session = RoundSession::new();
    session.start(&course);

    assert!(!session.add_stroke(0));
    assert_eq!(session.current_round().map(|r| r.holes_played()), Some(0));
    assert!(session.subtract_stroke(0));
    assert_eq!(session.current_round().and_then(|r| r.score(0)), Some(MAX_STROKES - 1));

    session.score_hole(0, MIN_STROKES);
    assert!(!session.subtract_stroke(0));
    assert_eq!(session.current_round().and_then(|r| r.score(0)), Some(MIN_STROKES));
}

#[test]
fn test3_idle_session_drops_everything() {
    let mut session = RoundSession::new();
    assert!(!session.score_hole(0, 4));
    assert!(!session.subtract_stroke(0));
    assert!(session.complete().is_none());
    assert!(!session.abandon());
    assert!(session.current_round().is_none());
}
