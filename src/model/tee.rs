use serde::{Deserialize, Serialize};

/// A color-coded starting position.
///
/// On a hole, `rating` is the stroke index of the hole from this tee and
/// `slope` is usually 0. On a course's tee set, `rating`/`slope` carry the
/// course rating and slope, and `yardage`/`par` are the course totals.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tee {
    pub color: String,
    pub yardage: u32,
    pub par: i32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub slope: i32,
}

impl Tee {
    #[must_use]
    pub fn new(color: impl Into<String>, yardage: u32, par: i32) -> Self {
        Self {
            color: color.into(),
            yardage,
            par,
            rating: 0.0,
            slope: 0,
        }
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64, slope: i32) -> Self {
        self.rating = rating;
        self.slope = slope;
        self
    }

    #[must_use]
    pub fn is_color(&self, color: &str) -> bool {
        self.color.eq_ignore_ascii_case(color)
    }
}
