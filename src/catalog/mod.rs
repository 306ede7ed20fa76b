use ahash::RandomState;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::CoreError;
use crate::model::{Course, CourseId};

mod resolve;

pub use resolve::{Resolution, resolve, resolve_course};

const BUILTIN_COURSES: &str = include_str!("../data/courses.json");

/// Read-only source of playable courses.
pub trait CourseStore {
    /// Every course in stable catalog order.
    fn all_courses(&self) -> &[Course];
    fn course_by_id(&self, id: &CourseId) -> Option<&Course>;
    /// Case-insensitive exact match first, then the first substring match.
    fn course_by_name(&self, name: &str) -> Option<&Course>;
    /// The course a reference degrades to when nothing else matches.
    fn default_course(&self) -> &Course;
}

/// Ordered, immutable collection of courses with an id index.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    courses: Vec<Course>,
    by_id: HashMap<CourseId, usize, RandomState>,
}

impl CourseCatalog {
    /// # Errors
    ///
    /// Will return `Err` if `courses` is empty or two courses share an id.
    pub fn new(courses: Vec<Course>) -> Result<Self, CoreError> {
        if courses.is_empty() {
            return Err(CoreError::Catalog("course catalog is empty".into()));
        }
        let mut by_id = HashMap::with_capacity_and_hasher(courses.len(), RandomState::new());
        for (idx, course) in courses.iter().enumerate() {
            check_ordinals(course)?;
            if by_id.insert(course.id().clone(), idx).is_some() {
                return Err(CoreError::Catalog(format!(
                    "duplicate course id '{}'",
                    course.id()
                )));
            }
        }
        Ok(Self { courses, by_id })
    }

    /// The courses compiled into the binary.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the bundled course json is malformed.
    pub fn builtin() -> Result<Self, CoreError> {
        Self::from_json_str(BUILTIN_COURSES)
    }

    /// # Errors
    ///
    /// Will return `Err` if the json does not describe a non-empty course list.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Self::new(courses)
    }

    /// # Errors
    ///
    /// Will return `Err` if the file is unreadable or not a valid course list.
    pub fn from_json_file(path: &Path) -> Result<Self, CoreError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CoreError::Catalog(format!("read course file {}: {e}", path.display()))
        })?;
        let catalog = Self::from_json_str(&contents)?;
        tracing::info!(
            courses = catalog.courses.len(),
            "loaded course catalog from {}",
            path.display()
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses whose name or address contains `text`, ignoring case. Blank
    /// text returns the whole catalog.
    #[must_use]
    pub fn search(&self, text: &str) -> Vec<&Course> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return self.courses.iter().collect();
        }
        self.courses
            .iter()
            .filter(|course| {
                course.name().to_lowercase().contains(&needle)
                    || course.address().to_lowercase().contains(&needle)
            })
            .collect()
    }

}

/// Holes are sorted by ordinal, so the ordinals must read exactly `1..=n`
/// for score index `i` to be hole `i + 1`.
fn check_ordinals(course: &Course) -> Result<(), CoreError> {
    for (expected, hole) in (1..).zip(course.holes()) {
        if hole.number != expected {
            return Err(CoreError::Catalog(format!(
                "course '{}' has hole {} where hole {expected} belongs",
                course.id(),
                hole.number
            )));
        }
    }
    Ok(())
}

impl CourseStore for CourseCatalog {
    fn all_courses(&self) -> &[Course] {
        &self.courses
    }

    fn course_by_id(&self, id: &CourseId) -> Option<&Course> {
        self.by_id.get(id).map(|idx| &self.courses[*idx])
    }

    fn course_by_name(&self, name: &str) -> Option<&Course> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.courses
            .iter()
            .find(|course| course.name().to_lowercase() == needle)
            .or_else(|| {
                self.courses
                    .iter()
                    .find(|course| course.name().to_lowercase().contains(&needle))
            })
    }

    fn default_course(&self) -> &Course {
        &self.courses[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hole, Tee};

    fn course(id: &str, name: &str, address: &str) -> Course {
        Course::new(
            id,
            name,
            address,
            Vec::new(),
            vec![Hole::new(1, vec![Tee::new("white", 300, 4)])],
        )
    }

    fn catalog() -> CourseCatalog {
        CourseCatalog::new(vec![
            course("pb", "Pebble Beach", "Pebble Beach, CA"),
            course("sp", "Spyglass Hill", "Pebble Beach, CA"),
            course("pebble", "Pebble", "Monterey, CA"),
        ])
        .unwrap()
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            CourseCatalog::new(Vec::new()),
            Err(CoreError::Catalog(_))
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = CourseCatalog::new(vec![course("a", "A", ""), course("a", "B", "")]);
        assert!(result.is_err());
    }

    fn numbered(numbers: &[u32]) -> Course {
        let holes = numbers
            .iter()
            .map(|n| Hole::new(*n, vec![Tee::new("white", 300, 4)]))
            .collect();
        Course::new("odd", "Odd Numbers", "", Vec::new(), holes)
    }

    #[test]
    fn hole_ordinals_must_run_from_one() {
        for numbers in [&[1, 2, 2][..], &[1, 3, 7], &[0, 1, 2], &[2, 3]] {
            assert!(
                matches!(
                    CourseCatalog::new(vec![numbered(numbers)]),
                    Err(CoreError::Catalog(_))
                ),
                "{numbers:?} should be rejected"
            );
        }
        // listed out of order is fine; construction sorts
        assert!(CourseCatalog::new(vec![numbered(&[3, 1, 2])]).is_ok());
    }

    #[test]
    fn lookups() {
        let catalog = catalog();
        assert_eq!(
            catalog.course_by_id(&"sp".into()).map(Course::name),
            Some("Spyglass Hill")
        );
        assert!(catalog.course_by_id(&"SP".into()).is_none());
        // exact name beats an earlier substring match
        assert_eq!(
            catalog.course_by_name("PEBBLE").map(|c| c.id().as_str()),
            Some("pebble")
        );
        assert_eq!(
            catalog.course_by_name("glass").map(|c| c.id().as_str()),
            Some("sp")
        );
        assert!(catalog.course_by_name("").is_none());
        assert!(catalog.course_by_name("augusta").is_none());
    }

    #[test]
    fn search_name_or_address() {
        let catalog = catalog();
        assert_eq!(catalog.search("").len(), 3);
        assert_eq!(catalog.search("monterey").len(), 1);
        assert_eq!(catalog.search("pebble beach").len(), 2);
        assert!(catalog.search("winnipeg").is_empty());
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = CourseCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.default_course().id().as_str(), "st-boniface");
        for course in catalog.all_courses() {
            assert_eq!(course.hole_count(), 18);
        }
    }
}
