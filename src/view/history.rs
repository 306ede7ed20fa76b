use maud::{Markup, html};

use super::render_page;
use super::utils::duration_label;
use crate::model::{Course, Round, format_to_par};

pub const HISTORY_TITLE: &str = "Round history";

/// A saved round paired with the course it resolved to.
pub struct HistoryRow<'a> {
    pub round: &'a Round,
    pub course: &'a Course,
}

#[must_use]
pub fn render_history(rows: &[HistoryRow<'_>], query: &str) -> Markup {
    let content = html! {
        form class="search" method="get" action="/rounds" {
            input type="search" name="q" value=(query) placeholder="Course or date";
            button type="submit" { "Search" }
        }
        @if rows.is_empty() {
            p class="empty" { "No rounds yet." }
        } @else {
            table class="history" {
                thead {
                    tr {
                        th { "Date" }
                        th { "Course" }
                        th { "Holes" }
                        th { "Score" }
                        th { "To par" }
                        th { "Time" }
                        th {}
                    }
                }
                tbody {
                    @for row in rows {
                        @let round = row.round;
                        tr data-round=(round.id()) class=(if round.is_complete() { "complete" } else { "partial" }) {
                            td { (round.date_string()) }
                            td { (row.course.name()) }
                            td { (round.holes_played()) " / " (round.hole_count()) }
                            td { (round.total_score()) }
                            td { (format_to_par(round.to_par(row.course))) }
                            td { (duration_label(round)) }
                            td {
                                form method="post" action={ "/rounds/" (round.id()) "/delete" } {
                                    button type="submit" class="danger" { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    render_page(HISTORY_TITLE, &content)
}
