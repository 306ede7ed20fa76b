#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web::Data;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use rusty_round::model::{Course, Hole, Round, Tee};
use rusty_round::{AppState, CourseCatalog, RoundStore};

/// A course whose holes have the given pars, one white tee each.
pub fn course_with_pars(id: &str, name: &str, pars: &[i32]) -> Course {
    let holes = pars
        .iter()
        .zip(1..)
        .map(|(par, number)| Hole::new(number, vec![Tee::new("white", 300 + 10 * number, *par)]))
        .collect();
    Course::new(id, name, "", Vec::new(), holes)
}

pub fn eighteen_holes() -> Course {
    course_with_pars(
        "links",
        "Links Eighteen",
        &[4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 3, 4, 5, 4, 4, 3, 4, 5],
    )
}

pub fn test_catalog() -> CourseCatalog {
    CourseCatalog::new(vec![
        course_with_pars("meadow", "Meadow Nine", &[4, 3, 5, 4, 4, 3, 5, 4, 4]),
        course_with_pars("pebble", "Pebble Beach", &[4, 5, 4, 4, 3, 5, 3, 4, 4]),
        eighteen_holes(),
    ])
    .expect("test catalog is valid")
}

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 30, 0)
        .single()
        .expect("valid date")
}

/// A saved round whose stored course reference is whatever the caller says,
/// as if written by an older catalog.
pub fn round_with_reference(course_id: &str, course_name: &str, scores: &[i32]) -> Round {
    let date = at(2025, 8, 1);
    serde_json::from_value(json!({
        "id": "6f1c2a52-8d1e-4b7a-9a44-0d8b3f2f5c11",
        "course_id": course_id,
        "course_name": course_name,
        "date": date,
        "start_time": date,
        "end_time": null,
        "scores": scores,
        "played_holes": vec![true; scores.len()],
    }))
    .expect("round document is valid")
}

pub fn test_state(store: Arc<dyn RoundStore>) -> Data<AppState> {
    Data::new(AppState::new(Arc::new(test_catalog()), store))
}
