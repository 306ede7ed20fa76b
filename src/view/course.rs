use maud::{Markup, html};

use super::render_page;
use crate::model::Course;

#[must_use]
pub fn render_course_overview(course: &Course) -> Markup {
    let colors = course.tee_colors();
    let totals = course.all_totals();
    let content = html! {
        p class="address" { (course.address()) }
        form method="post" action="/round/start" {
            input type="hidden" name="course" value=(course.id());
            button type="submit" { "Start round" }
        }

        h3 { "Tees" }
        table class="tee-totals" {
            thead {
                tr {
                    th { "Tee" }
                    th { "Out" }
                    th { "In" }
                    th { "Total" }
                    th { "Par" }
                    th { "Rating / Slope" }
                }
            }
            tbody {
                @for total in &totals {
                    @let course_tee = course.course_tee(&total.color);
                    tr data-tee=(total.color) {
                        td { (total.color) }
                        td { (total.front_yardage) }
                        td { (total.back_yardage) }
                        td { (total.total_yardage) }
                        td { (total.total_par) }
                        td {
                            @if let Some(tee) = course_tee {
                                (format!("{:.1}", tee.rating)) " / " (tee.slope)
                            } @else {
                                "-"
                            }
                        }
                    }
                }
            }
        }

        h3 { "Holes" }
        table class="holes" {
            thead {
                tr {
                    th { "Hole" }
                    th { "Par" }
                    @for color in &colors {
                        th { (color) }
                    }
                    th { "Hcp" }
                    th { "Shape" }
                }
            }
            tbody {
                @for hole in course.holes() {
                    tr {
                        td { (hole.number) }
                        td { (hole.par()) }
                        @for color in &colors {
                            td { (hole.yardage(color)) }
                        }
                        td {
                            @match colors.first().and_then(|c| hole.handicap(c)) {
                                Some(hcp) => { (hcp) }
                                None => { "-" }
                            }
                        }
                        td { (hole.shape) }
                    }
                }
            }
        }
    };
    render_page(course.name(), &content)
}
