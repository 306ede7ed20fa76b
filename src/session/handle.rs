use super::RoundSession;
use crate::model::RoundId;

/// Read/write view of one hole of the active round.
///
/// A handle remembers the round it was issued for. Once that round is
/// completed, abandoned or replaced, reads give `None` and writes do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleHandle {
    round_id: RoundId,
    index: usize,
}

impl HoleHandle {
    pub(super) fn new(round_id: RoundId, index: usize) -> Self {
        Self { round_id, index }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// 1-based hole number, as shown on a scorecard.
    #[must_use]
    pub fn number(self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub fn round_id(self) -> RoundId {
        self.round_id
    }

    #[must_use]
    pub fn is_live(self, session: &RoundSession) -> bool {
        session.current_round_id() == Some(self.round_id)
    }

    #[must_use]
    pub fn get(self, session: &RoundSession) -> Option<i32> {
        if !self.is_live(session) {
            return None;
        }
        session.current_round()?.score(self.index)
    }

    #[must_use]
    pub fn is_played(self, session: &RoundSession) -> bool {
        self.is_live(session)
            && session
                .current_round()
                .is_some_and(|round| round.is_played(self.index))
    }

    pub fn set(self, session: &mut RoundSession, score: i32) -> bool {
        if !self.is_live(session) {
            tracing::debug!(round_id = %self.round_id, "ignoring write through stale hole handle");
            return false;
        }
        session.score_hole(self.index, score)
    }
}
