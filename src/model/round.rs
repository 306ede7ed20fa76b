use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::course::{Course, CourseId};
use super::score::ScoreDisplay;
use super::utils::{format_round_date, format_round_duration};

const NINE: usize = 9;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    ///
    /// Will return `Err` if `s` is not a hyphenated or simple uuid.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize)]
struct RoundDoc {
    id: RoundId,
    course_id: CourseId,
    course_name: String,
    date: DateTime<Utc>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    scores: Vec<i32>,
    played_holes: Vec<bool>,
}

impl TryFrom<RoundDoc> for Round {
    type Error = String;

    fn try_from(doc: RoundDoc) -> Result<Self, Self::Error> {
        if doc.scores.len() != doc.played_holes.len() {
            return Err(format!(
                "round {} has {} scores but {} played flags",
                doc.id,
                doc.scores.len(),
                doc.played_holes.len()
            ));
        }
        let holes_played = count_played(&doc.played_holes);
        Ok(Round {
            id: doc.id,
            course_id: doc.course_id,
            course_name: doc.course_name,
            date: doc.date,
            start_time: doc.start_time,
            end_time: doc.end_time,
            scores: doc.scores,
            played_holes: doc.played_holes,
            holes_played,
        })
    }
}

fn count_played(played: &[bool]) -> usize {
    played.iter().filter(|played| **played).count()
}

/// Score state for one round at one course.
///
/// `scores` and `played_holes` are index-aligned with the course's holes:
/// index `i` is the hole with ordinal `i + 1`. The course is held as an
/// id/name snapshot, not a live reference; use
/// [`resolve_course`](crate::catalog::resolve_course) to get it back.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RoundDoc")]
pub struct Round {
    id: RoundId,
    course_id: CourseId,
    course_name: String,
    date: DateTime<Utc>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    scores: Vec<i32>,
    played_holes: Vec<bool>,
    #[serde(skip_serializing)]
    holes_played: usize,
}

impl Round {
    /// Start a round at `course`. Every hole is pre-filled with its par and
    /// marked unplayed.
    #[must_use]
    pub fn new(course: &Course) -> Self {
        Self::new_at(course, Utc::now())
    }

    #[must_use]
    pub fn new_at(course: &Course, now: DateTime<Utc>) -> Self {
        let scores: Vec<i32> = course.holes().iter().map(|hole| hole.par()).collect();
        let played_holes = vec![false; scores.len()];
        Self {
            id: RoundId::new_v4(),
            course_id: course.id().clone(),
            course_name: course.name().to_string(),
            date: now,
            start_time: Some(now),
            end_time: None,
            scores,
            played_holes,
            holes_played: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> RoundId {
        self.id
    }

    #[must_use]
    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    #[must_use]
    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub(crate) fn course_ref_mut(&mut self) -> (&mut CourseId, &mut String) {
        (&mut self.course_id, &mut self.course_name)
    }

    #[must_use]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    #[must_use]
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    #[must_use]
    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    #[must_use]
    pub fn played_holes(&self) -> &[bool] {
        &self.played_holes
    }

    #[must_use]
    pub fn holes_played(&self) -> usize {
        self.holes_played
    }

    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn score(&self, hole_index: usize) -> Option<i32> {
        self.scores.get(hole_index).copied()
    }

    #[must_use]
    pub fn is_played(&self, hole_index: usize) -> bool {
        self.played_holes.get(hole_index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.end_time.is_some()
    }

    /// Record `score` for the hole at `hole_index` and mark it played.
    ///
    /// Out-of-range indices and finalized rounds are ignored. The played
    /// count is recounted from the flags, so re-scoring a hole never counts
    /// it twice. Returns whether the score was applied.
    pub fn update_score(&mut self, hole_index: usize, score: i32) -> bool {
        if self.is_finalized() || hole_index >= self.scores.len() {
            return false;
        }
        self.scores[hole_index] = score;
        self.played_holes[hole_index] = true;
        self.holes_played = count_played(&self.played_holes);
        true
    }

    fn played_scores(&self, range: std::ops::Range<usize>) -> i32 {
        let end = range.end.min(self.scores.len());
        let start = range.start.min(end);
        self.scores[start..end]
            .iter()
            .zip(&self.played_holes[start..end])
            .filter(|(_, played)| **played)
            .fold(0, |total, (score, _)| total.saturating_add(*score))
    }

    /// Strokes over played holes; unplayed holes count 0 whatever they hold.
    #[must_use]
    pub fn total_score(&self) -> i32 {
        self.played_scores(0..self.scores.len())
    }

    #[must_use]
    pub fn front_nine(&self) -> i32 {
        self.played_scores(0..NINE)
    }

    #[must_use]
    pub fn back_nine(&self) -> i32 {
        self.played_scores(NINE..self.scores.len())
    }

    /// Par summed over the played holes of `course`.
    #[must_use]
    pub fn par_for_played_holes(&self, course: &Course) -> i32 {
        course
            .holes()
            .iter()
            .zip(&self.played_holes)
            .filter(|(_, played)| **played)
            .fold(0, |total, (hole, _)| total.saturating_add(hole.par()))
    }

    #[must_use]
    pub fn to_par(&self, course: &Course) -> i32 {
        self.total_score()
            .saturating_sub(self.par_for_played_holes(course))
    }

    /// Outcome for a played hole; `None` if unplayed or out of range.
    #[must_use]
    pub fn hole_result(&self, hole_index: usize, course: &Course) -> Option<ScoreDisplay> {
        if !self.is_played(hole_index) {
            return None;
        }
        let hole = course.holes().get(hole_index)?;
        Some(ScoreDisplay::from_strokes(self.scores[hole_index], hole.par()))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.holes_played == self.scores.len()
    }

    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.holes_played > 0 && self.holes_played < self.scores.len()
    }

    #[must_use]
    pub fn duration(&self) -> Option<ChronoDuration> {
        self.duration_at(Utc::now())
    }

    #[must_use]
    pub fn duration_at(&self, now: DateTime<Utc>) -> Option<ChronoDuration> {
        self.start_time
            .map(|start| self.end_time.unwrap_or(now) - start)
    }

    #[must_use]
    pub fn round_duration(&self) -> Option<String> {
        self.duration().map(format_round_duration)
    }

    #[must_use]
    pub fn date_string(&self) -> String {
        format_round_date(&self.date)
    }

    /// Stamp the end time. The round is read-only afterwards.
    #[must_use]
    pub fn finalize(self) -> Self {
        self.finalize_at(Utc::now())
    }

    #[must_use]
    pub fn finalize_at(mut self, now: DateTime<Utc>) -> Self {
        self.end_time = Some(now);
        self
    }
}
