use maud::{Markup, html};

use super::render_page;
use crate::model::Course;

pub const COURSE_LIST_TITLE: &str = "Courses";

#[must_use]
pub fn render_course_list(courses: &[&Course], query: &str) -> Markup {
    let content = html! {
        form class="search" method="get" action="/" {
            input type="search" name="q" value=(query) placeholder="Search courses";
            button type="submit" { "Search" }
        }
        @if courses.is_empty() {
            p class="empty" { "No courses match \"" (query) "\"." }
        } @else {
            table class="course-list" {
                thead {
                    tr {
                        th { "Course" }
                        th { "Address" }
                        th { "Holes" }
                        th { "Par" }
                        th {}
                    }
                }
                tbody {
                    @for course in courses {
                        tr data-course=(course.id()) {
                            td { a href={ "/course/" (course.id()) } { (course.name()) } }
                            td { (course.address()) }
                            td { (course.hole_count()) }
                            td { (course.par()) }
                            td {
                                form method="post" action="/round/start" {
                                    input type="hidden" name="course" value=(course.id());
                                    button type="submit" { "Start round" }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    render_page(COURSE_LIST_TITLE, &content)
}
