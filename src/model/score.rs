use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single hole relative to par.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    Other,
}

impl ScoreDisplay {
    /// Classify a stroke count against par. A hole in one on a par 3 is
    /// still reported by its distance to par (Eagle).
    #[must_use]
    pub fn from_strokes(strokes: i32, par: i32) -> Self {
        Self::from_i32(strokes.saturating_sub(par))
    }

    #[must_use]
    pub fn from_i32(i: i32) -> Self {
        match i {
            -4 => Self::Condor,
            -3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            3 => Self::TripleBogey,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Condor | Self::Albatross | Self::Eagle => "eagle",
            Self::Birdie => "birdie",
            Self::Par => "par",
            Self::Bogey => "bogey",
            Self::DoubleBogey | Self::TripleBogey | Self::Other => "double-bogey",
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl fmt::Display for ScoreDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Condor => "condor",
            Self::Albatross => "albatross",
            Self::Eagle => "eagle",
            Self::Birdie => "birdie",
            Self::Par => "par",
            Self::Bogey => "bogey",
            Self::DoubleBogey => "double bogey",
            Self::TripleBogey => "triple bogey",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// `E` for even, otherwise a signed stroke count (`+3`, `-1`).
#[must_use]
pub fn format_to_par(diff: i32) -> String {
    match diff {
        0 => "E".to_string(),
        d if d > 0 => format!("+{d}"),
        d => d.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_against_par() {
        assert_eq!(ScoreDisplay::from_strokes(3, 4), ScoreDisplay::Birdie);
        assert_eq!(ScoreDisplay::from_strokes(4, 4), ScoreDisplay::Par);
        assert_eq!(ScoreDisplay::from_strokes(6, 4), ScoreDisplay::DoubleBogey);
        assert_eq!(ScoreDisplay::from_strokes(1, 3), ScoreDisplay::Eagle);
        assert_eq!(ScoreDisplay::from_strokes(12, 4), ScoreDisplay::Other);
    }

    #[test]
    fn to_par_strings() {
        assert_eq!(format_to_par(0), "E");
        assert_eq!(format_to_par(5), "+5");
        assert_eq!(format_to_par(-2), "-2");
    }
}
