pub mod course;
pub mod history;
pub mod index;
pub mod scorecard;
pub mod utils;

pub use course::render_course_overview;
pub use history::{HistoryRow, render_history};
pub use index::render_course_list;
pub use scorecard::{render_no_round, render_scorecard};

use maud::{Markup, html};

pub const STYLESHEET_PATH: &str = "/static/scorecard.css";

/// Shared page chrome: head, the three navigation tabs and a heading.
#[must_use]
pub fn render_page(title: &str, content: &Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" href=(STYLESHEET_PATH);
            title { (title) }
        }
        body {
            nav class="tabs" {
                a href="/" { "Courses" }
                a href="/round" { "Scorecard" }
                a href="/rounds" { "History" }
            }
            h1 { (title) }
            (content)
        }
    }
}
