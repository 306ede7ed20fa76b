use std::io::Write;

use rusty_round::model::CourseId;
use rusty_round::{CourseCatalog, CourseStore, Resolution, resolve, resolve_course};

mod common;

#[test]
fn test2_id_hit_leaves_reference_alone() {
    let catalog = common::test_catalog();
    let mut id = CourseId::from("pebble");
    let mut name = String::from("Some Old Name");

    let (course, how) = resolve(&catalog, &mut id, &mut name);
    assert_eq!(course.name(), "Pebble Beach");
    assert_eq!(how, Resolution::ById);
    assert_eq!(id.as_str(), "pebble");
    assert_eq!(name, "Some Old Name");
}

#[test]
fn test2_stale_id_heals_by_name() {
    let catalog = common::test_catalog();
    let mut round = common::round_with_reference("X", "Pebble", &[4, 5]);

    let course = resolve_course(&catalog, &mut round);
    assert_eq!(course.id().as_str(), "pebble");
    assert_eq!(round.course_id().as_str(), "pebble");
    assert_eq!(round.course_name(), "Pebble");
}

#[test]
fn test2_double_miss_falls_back_to_first_course() {
    let catalog = common::test_catalog();
    let mut round = common::round_with_reference("gone", "Vanished Links", &[4]);

    let course = resolve_course(&catalog, &mut round);
    let first = &catalog.all_courses()[0];
    assert_eq!(course, first);
    assert_eq!(round.course_id(), first.id());
    assert_eq!(round.course_name(), first.name());
}

#[test]
fn test2_name_lookup_prefers_exact_match() {
    let catalog = common::test_catalog();
    assert_eq!(
        catalog.course_by_name("PEBBLE BEACH").map(|c| c.id().as_str()),
        Some("pebble")
    );
    assert_eq!(
        catalog.course_by_name("eighteen").map(|c| c.id().as_str()),
        Some("links")
    );
    assert!(catalog.course_by_name("nowhere").is_none());
}

#[test]
fn test2_catalog_from_json_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"[{{"id": "tiny", "name": "Tiny Pitch", "address": "1 Lane", "tees": [],
            "holes": [
              {{"number": 2, "tees": [{{"color": "red", "yardage": 90, "par": 3}}]}},
              {{"number": 1, "shape": "dog_left", "tees": [{{"color": "red", "yardage": 110, "par": 3}}]}}
            ]}}]"#
    )?;

    let catalog = CourseCatalog::from_json_file(file.path())?;
    let course = catalog
        .course_by_id(&CourseId::from("tiny"))
        .ok_or("tiny missing")?;
    assert_eq!(course.holes()[0].number, 1);
    assert_eq!(course.holes()[1].number, 2);
    assert_eq!(course.yardage_total("RED"), 200);
    assert_eq!(course.tee_colors(), vec!["red"]);
    Ok(())
}

#[test]
fn test2_empty_catalog_is_rejected() {
    assert!(CourseCatalog::from_json_str("[]").is_err());
    assert!(CourseCatalog::new(Vec::new()).is_err());
}
