use maud::{Markup, html};

use crate::model::{Round, ScoreDisplay};

pub fn score_with_shape(score: i32, disp: ScoreDisplay) -> Markup {
    let shape = match disp {
        ScoreDisplay::Condor | ScoreDisplay::Albatross | ScoreDisplay::Eagle => "◆",
        ScoreDisplay::Birdie | ScoreDisplay::Par => "●",
        ScoreDisplay::Bogey
        | ScoreDisplay::DoubleBogey
        | ScoreDisplay::TripleBogey
        | ScoreDisplay::Other => "▲",
    };

    html! {
        span class=(disp.css_class()) title=(disp) { (shape) " " (score) }
    }
}

/// `"1h 12m"`, or a dash for rounds without a start time.
pub fn duration_label(round: &Round) -> String {
    round.round_duration().unwrap_or_else(|| "-".to_string())
}
