use std::mem;

use crate::model::{Course, Round, RoundId};

mod handle;

pub use handle::HoleHandle;

pub const MIN_STROKES: i32 = 1;
pub const MAX_STROKES: i32 = 15;

struct ActiveRound {
    round: Round,
    course: Course,
    handles: Vec<HoleHandle>,
}

enum SessionState {
    Idle,
    Active(Box<ActiveRound>),
}

/// Owner of the round currently being played.
///
/// Exactly zero or one round is active. Every score change goes through
/// here; calls that arrive while idle, or for a hole the round does not
/// have, are dropped without error.
pub struct RoundSession {
    state: SessionState,
}

impl Default for RoundSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    fn active(&self) -> Option<&ActiveRound> {
        match &self.state {
            SessionState::Active(active) => Some(active.as_ref()),
            SessionState::Idle => None,
        }
    }

    fn active_mut(&mut self) -> Option<&mut ActiveRound> {
        match &mut self.state {
            SessionState::Active(active) => Some(active.as_mut()),
            SessionState::Idle => None,
        }
    }

    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.active().map(|active| &active.round)
    }

    #[must_use]
    pub fn current_course(&self) -> Option<&Course> {
        self.active().map(|active| &active.course)
    }

    #[must_use]
    pub fn current_round_id(&self) -> Option<RoundId> {
        self.current_round().map(Round::id)
    }

    /// One handle per hole of the active round; empty while idle.
    #[must_use]
    pub fn handles(&self) -> &[HoleHandle] {
        self.active().map_or(&[][..], |active| active.handles.as_slice())
    }

    #[must_use]
    pub fn handle(&self, hole_index: usize) -> Option<HoleHandle> {
        self.handles().get(hole_index).copied()
    }

    /// Begin a round at `course`.
    ///
    /// Starting while another round is active replaces it. The displaced
    /// round is handed back unfinalized; dropping it discards its scores.
    pub fn start(&mut self, course: &Course) -> Option<Round> {
        let round = Round::new(course);
        let handles = (0..round.hole_count())
            .map(|index| HoleHandle::new(round.id(), index))
            .collect();
        tracing::info!(round_id = %round.id(), "new round started at {}", course.name());

        let previous = mem::replace(
            &mut self.state,
            SessionState::Active(Box::new(ActiveRound {
                round,
                course: course.clone(),
                handles,
            })),
        );
        match previous {
            SessionState::Active(active) => {
                tracing::warn!(
                    replaced_round = %active.round.id(),
                    holes_played = active.round.holes_played(),
                    "started a new round while one was active"
                );
                Some(active.round)
            }
            SessionState::Idle => None,
        }
    }

    /// Record a score for a hole of the active round.
    pub fn score_hole(&mut self, hole_index: usize, score: i32) -> bool {
        let Some(active) = self.active_mut() else {
            tracing::debug!(hole_index, "ignoring score with no active round");
            return false;
        };
        let applied = active.round.update_score(hole_index, score);
        if applied {
            tracing::debug!(
                round_id = %active.round.id(),
                "updated score to {score} for hole {}",
                hole_index + 1
            );
        }
        applied
    }

    fn step(&mut self, hole_index: usize, delta: i32) -> bool {
        let Some(current) = self.current_round().and_then(|round| round.score(hole_index)) else {
            return false;
        };
        let Some(next) = current
            .checked_add(delta)
            .filter(|next| (MIN_STROKES..=MAX_STROKES).contains(next))
        else {
            return false;
        };
        self.score_hole(hole_index, next)
    }

    /// One more stroke on a hole, capped at [`MAX_STROKES`].
    pub fn add_stroke(&mut self, hole_index: usize) -> bool {
        self.step(hole_index, 1)
    }

    /// One fewer stroke on a hole, floored at [`MIN_STROKES`].
    pub fn subtract_stroke(&mut self, hole_index: usize) -> bool {
        self.step(hole_index, -1)
    }

    /// Quick-score par on a hole that has not been played yet.
    pub fn score_par(&mut self, hole_index: usize) -> bool {
        let Some(active) = self.active() else {
            return false;
        };
        if active.round.is_played(hole_index) {
            return false;
        }
        let Some(par) = active.course.holes().get(hole_index).map(|hole| hole.par()) else {
            return false;
        };
        self.score_hole(hole_index, par)
    }

    /// Finish the active round: stamp its end time, hand it back for
    /// saving, and go idle.
    pub fn complete(&mut self) -> Option<Round> {
        match mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Active(active) => {
                let round = active.round.finalize();
                tracing::info!(
                    round_id = %round.id(),
                    holes_played = round.holes_played(),
                    total = round.total_score(),
                    "round completed"
                );
                Some(round)
            }
            SessionState::Idle => None,
        }
    }

    /// Drop the active round and all of its scores.
    pub fn abandon(&mut self) -> bool {
        match mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Active(active) => {
                tracing::info!(round_id = %active.round.id(), "round abandoned");
                true
            }
            SessionState::Idle => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hole, Tee};

    fn course(pars: &[i32]) -> Course {
        let holes = pars
            .iter()
            .zip(1..)
            .map(|(par, number)| Hole::new(number, vec![Tee::new("white", 300, *par)]))
            .collect();
        Course::new("c", "Course", "", Vec::new(), holes)
    }

    #[test]
    fn idle_session_ignores_mutations() {
        let mut session = RoundSession::new();
        assert!(!session.score_hole(0, 4));
        assert!(!session.add_stroke(0));
        assert!(!session.score_par(0));
        assert!(session.handles().is_empty());
        assert!(session.complete().is_none());
        assert!(!session.abandon());
    }

    #[test]
    fn start_builds_one_handle_per_hole() {
        let mut session = RoundSession::new();
        assert!(session.start(&course(&[4, 3, 5])).is_none());
        assert!(session.is_active());
        assert_eq!(session.handles().len(), 3);
        assert_eq!(session.handle(2).map(HoleHandle::index), Some(2));
        assert!(session.handle(3).is_none());
    }

    #[test]
    fn strokes_stay_in_bounds() {
        let mut session = RoundSession::new();
        session.start(&course(&[1]));
        assert!(!session.subtract_stroke(0));
        assert_eq!(session.current_round().unwrap().holes_played(), 0);
        for _ in 0..14 {
            assert!(session.add_stroke(0));
        }
        assert!(!session.add_stroke(0));
        assert_eq!(session.current_round().unwrap().score(0), Some(MAX_STROKES));
        assert!(session.subtract_stroke(0));
        assert_eq!(session.current_round().unwrap().score(0), Some(14));
    }

    #[test]
    fn stepping_from_an_extreme_score_is_a_no_op() {
        let mut session = RoundSession::new();
        session.start(&course(&[4, 4]));
        session.score_hole(0, i32::MAX);
        session.score_hole(1, i32::MIN);
        assert!(!session.add_stroke(0));
        assert!(!session.subtract_stroke(1));
        assert_eq!(session.current_round().unwrap().score(0), Some(i32::MAX));
        assert_eq!(session.current_round().unwrap().score(1), Some(i32::MIN));
    }

    #[test]
    fn score_par_only_on_unplayed_holes() {
        let mut session = RoundSession::new();
        session.start(&course(&[4, 5]));
        assert!(session.score_par(1));
        assert_eq!(session.current_round().unwrap().total_score(), 5);
        session.score_hole(1, 7);
        assert!(!session.score_par(1));
        assert_eq!(session.current_round().unwrap().score(1), Some(7));
        assert!(!session.score_par(9));
    }

    #[test]
    fn restart_hands_back_displaced_round() {
        let mut session = RoundSession::new();
        session.start(&course(&[4, 3]));
        session.score_hole(0, 6);
        let first_id = session.current_round_id().unwrap();
        let displaced = session.start(&course(&[5])).expect("displaced round");
        assert_eq!(displaced.id(), first_id);
        assert_eq!(displaced.holes_played(), 1);
        assert!(displaced.end_time().is_none());
        assert_eq!(session.current_round().unwrap().hole_count(), 1);
    }

    #[test]
    fn complete_finalizes_and_goes_idle() {
        let mut session = RoundSession::new();
        session.start(&course(&[4, 3, 5]));
        session.score_hole(0, 5);
        session.score_hole(2, 6);
        let round = session.complete().expect("completed round");
        assert!(round.end_time().is_some());
        assert_eq!(round.holes_played(), 2);
        assert_eq!(round.total_score(), 11);
        assert!(!session.is_active());
    }

    #[test]
    fn abandon_discards() {
        let mut session = RoundSession::new();
        session.start(&course(&[4]));
        session.score_hole(0, 3);
        assert!(session.abandon());
        assert!(!session.is_active());
        assert!(session.current_round().is_none());
    }
}
