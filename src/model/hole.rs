use serde::{Deserialize, Serialize};
use std::fmt;

use super::tee::Tee;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HoleShape {
    #[default]
    Straight,
    DogLeft,
    DogRight,
}

impl fmt::Display for HoleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HoleShape::Straight => "straight",
            HoleShape::DogLeft => "dogleg left",
            HoleShape::DogRight => "dogleg right",
        };
        write!(f, "{s}")
    }
}

/// One hole of a course. `number` is the 1-based ordinal.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Hole {
    pub number: u32,
    pub tees: Vec<Tee>,
    #[serde(default)]
    pub shape: HoleShape,
}

impl Hole {
    #[must_use]
    pub fn new(number: u32, tees: Vec<Tee>) -> Self {
        Self {
            number,
            tees,
            shape: HoleShape::default(),
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: HoleShape) -> Self {
        self.shape = shape;
        self
    }

    /// Par from the first listed tee, 0 for a hole with no tees.
    #[must_use]
    pub fn par(&self) -> i32 {
        self.tees.first().map_or(0, |tee| tee.par)
    }

    #[must_use]
    pub fn tee(&self, color: &str) -> Option<&Tee> {
        self.tees.iter().find(|tee| tee.is_color(color))
    }

    /// Yardage from the given tee, 0 if the hole has no such tee.
    #[must_use]
    pub fn yardage(&self, color: &str) -> u32 {
        self.tee(color).map_or(0, |tee| tee.yardage)
    }

    /// Par from the given tee, falling back to the primary par.
    #[must_use]
    pub fn par_for(&self, color: &str) -> i32 {
        self.tee(color).map_or_else(|| self.par(), |tee| tee.par)
    }

    /// Stroke index from the given tee.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn handicap(&self, color: &str) -> Option<i32> {
        self.tee(color).map(|tee| tee.rating.round() as i32)
    }
}
