use super::CourseStore;
use crate::model::{Course, CourseId, Round};

/// Which step of the lookup chain produced the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    ById,
    /// Id missed, name matched; the stored id was rewritten.
    ByName,
    /// Both missed; the stored id and name now point at the default course.
    Fallback,
}

impl Resolution {
    /// Whether the caller's stored reference was rewritten.
    #[must_use]
    pub fn rewrote_reference(self) -> bool {
        !matches!(self, Resolution::ById)
    }
}

/// Map a stored course reference back to a live course. Never fails.
///
/// Tries the id, then the name. A name hit corrects `course_id`; a double
/// miss overwrites both fields with the store's default course.
pub fn resolve<'c, S>(
    store: &'c S,
    course_id: &mut CourseId,
    course_name: &mut String,
) -> (&'c Course, Resolution)
where
    S: CourseStore + ?Sized,
{
    if let Some(course) = store.course_by_id(course_id) {
        return (course, Resolution::ById);
    }

    if let Some(course) = store.course_by_name(course_name) {
        tracing::warn!(
            stale_id = %course_id,
            course_id = %course.id(),
            "course id not in catalog, matched by name '{course_name}'"
        );
        *course_id = course.id().clone();
        return (course, Resolution::ByName);
    }

    let course = store.default_course();
    tracing::error!(
        "failed to find course with id {course_id} or name '{course_name}', using {}",
        course.name()
    );
    *course_id = course.id().clone();
    *course_name = course.name().to_string();
    (course, Resolution::Fallback)
}

/// Resolve the course a round was played on, healing the round's stored
/// reference when the catalog has drifted.
pub fn resolve_course<'c, S>(store: &'c S, round: &mut Round) -> &'c Course
where
    S: CourseStore + ?Sized,
{
    let (course_id, course_name) = round.course_ref_mut();
    resolve(store, course_id, course_name).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CourseCatalog;
    use crate::model::{Hole, Tee};

    fn catalog() -> CourseCatalog {
        let mk = |id: &str, name: &str| {
            Course::new(
                id,
                name,
                "",
                Vec::new(),
                vec![Hole::new(1, vec![Tee::new("white", 300, 4)])],
            )
        };
        CourseCatalog::new(vec![mk("first", "First Links"), mk("pb", "Pebble Beach")]).unwrap()
    }

    #[test]
    fn id_hit_leaves_reference_alone() {
        let catalog = catalog();
        let mut id = CourseId::from("pb");
        let mut name = String::from("Old Name");
        let (course, how) = resolve(&catalog, &mut id, &mut name);
        assert_eq!(course.id().as_str(), "pb");
        assert_eq!(how, Resolution::ById);
        assert!(!how.rewrote_reference());
        assert_eq!(name, "Old Name");
    }

    #[test]
    fn name_hit_corrects_id() {
        let catalog = catalog();
        let mut id = CourseId::from("X");
        let mut name = String::from("Pebble");
        let (course, how) = resolve(&catalog, &mut id, &mut name);
        assert_eq!(course.id().as_str(), "pb");
        assert_eq!(how, Resolution::ByName);
        assert_eq!(id.as_str(), "pb");
        assert_eq!(name, "Pebble");
    }

    #[test]
    fn double_miss_falls_back_to_first() {
        let catalog = catalog();
        let mut id = CourseId::from("gone");
        let mut name = String::from("Demolished GC");
        let (course, how) = resolve(&catalog, &mut id, &mut name);
        assert_eq!(course.id().as_str(), "first");
        assert_eq!(how, Resolution::Fallback);
        assert_eq!(id.as_str(), "first");
        assert_eq!(name, "First Links");
    }
}
