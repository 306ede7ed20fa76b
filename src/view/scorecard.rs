use maud::{Markup, html};

use super::render_page;
use super::utils::{duration_label, score_with_shape};
use crate::model::{Course, Round, format_to_par};

pub const NO_ROUND_TITLE: &str = "No round in progress";

fn stroke_form(hole_number: usize, delta: i32, label: &str) -> Markup {
    html! {
        form class="inline" method="post" action="/round/stroke" {
            input type="hidden" name="hole" value=(hole_number);
            input type="hidden" name="delta" value=(delta);
            button type="submit" { (label) }
        }
    }
}

fn summary(round: &Round, course: &Course) -> Markup {
    html! {
        table class="round-summary" {
            tr { th { "Out" } td data-total="front" { (round.front_nine()) } }
            tr { th { "In" } td data-total="back" { (round.back_nine()) } }
            tr { th { "Total" } td data-total="total" { (round.total_score()) } }
            tr { th { "To par" } td data-total="to-par" { (format_to_par(round.to_par(course))) } }
            tr { th { "Holes" } td data-total="played" { (round.holes_played()) " / " (round.hole_count()) } }
            tr { th { "Time" } td { (duration_label(round)) } }
        }
    }
}

/// Scorecard for the active round, one row per hole.
#[must_use]
pub fn render_scorecard(round: &Round, course: &Course) -> Markup {
    let primary_color = course.tee_colors().first().map(|c| (*c).to_string());
    let content = html! {
        p class="round-meta" { (round.course_name()) " · " (round.date_string()) }
        table class="scorecard" {
            thead {
                tr {
                    th { "Hole" }
                    th { "Par" }
                    @if let Some(color) = &primary_color {
                        th { (color) }
                    }
                    th { "Score" }
                    th {}
                }
            }
            tbody {
                @for (idx, hole) in course.holes().iter().enumerate() {
                    @let number = idx + 1;
                    @let played = round.is_played(idx);
                    tr data-hole=(number) class=(if played { "played" } else { "unplayed" }) {
                        td { (hole.number) }
                        td { (hole.par()) }
                        @if let Some(color) = &primary_color {
                            td { (hole.yardage(color)) }
                        }
                        td class="score" {
                            @match (round.score(idx), round.hole_result(idx, course)) {
                                (Some(score), Some(result)) => { (score_with_shape(score, result)) }
                                _ => { "-" }
                            }
                        }
                        td class="controls" {
                            (stroke_form(number, -1, "−"))
                            (stroke_form(number, 1, "+"))
                            @if !played {
                                form class="inline" method="post" action="/round/par" {
                                    input type="hidden" name="hole" value=(number);
                                    button type="submit" { "Par" }
                                }
                            }
                            form class="inline" method="post" action="/round/score" {
                                input type="hidden" name="hole" value=(number);
                                input type="number" name="score" min="1" max="15" value=[round.score(idx)];
                                button type="submit" { "Set" }
                            }
                        }
                    }
                }
            }
        }
        (summary(round, course))
        div class="round-actions" {
            form class="inline" method="post" action="/round/complete" {
                button type="submit" { "Finish round" }
            }
            form class="inline" method="post" action="/round/abandon" {
                button type="submit" class="danger" { "Abandon" }
            }
        }
    };
    render_page(course.name(), &content)
}

#[must_use]
pub fn render_no_round() -> Markup {
    let content = html! {
        p { "Pick a course to start scoring." }
        a href="/" { "Browse courses" }
    };
    render_page(NO_ROUND_TITLE, &content)
}
