use serde::{Deserialize, Serialize};
use std::fmt;

use super::hole::Hole;
use super::tee::Tee;

const NINE: usize = 9;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CourseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Raw shape of a course as it appears in catalog files. Holes may be in any
/// order here; converting into [`Course`] sorts them.
#[derive(Deserialize)]
struct CourseDoc {
    id: CourseId,
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    tees: Vec<Tee>,
    holes: Vec<Hole>,
}

impl From<CourseDoc> for Course {
    fn from(doc: CourseDoc) -> Self {
        Course::new(doc.id, doc.name, doc.address, doc.tees, doc.holes)
    }
}

/// A playable course. Holes are always sorted ascending by ordinal.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(from = "CourseDoc")]
pub struct Course {
    id: CourseId,
    name: String,
    address: String,
    tees: Vec<Tee>,
    holes: Vec<Hole>,
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Course {}

/// Yardage and par totals for one tee color.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CourseTotals {
    pub color: String,
    pub front_yardage: u32,
    pub back_yardage: u32,
    pub total_yardage: u32,
    pub front_par: i32,
    pub back_par: i32,
    pub total_par: i32,
}

impl Course {
    #[must_use]
    pub fn new(
        id: impl Into<CourseId>,
        name: impl Into<String>,
        address: impl Into<String>,
        tees: Vec<Tee>,
        mut holes: Vec<Hole>,
    ) -> Self {
        holes.sort_by_key(|hole| hole.number);
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            tees,
            holes,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    #[must_use]
    pub fn tees(&self) -> &[Tee] {
        &self.tees
    }

    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    #[must_use]
    pub fn course_tee(&self, color: &str) -> Option<&Tee> {
        self.tees.iter().find(|tee| tee.is_color(color))
    }

    /// Tee colors in course tee-set order; falls back to the first hole's
    /// tees when the course has no tee set.
    #[must_use]
    pub fn tee_colors(&self) -> Vec<&str> {
        let source = if self.tees.is_empty() {
            self.holes.first().map_or(&[][..], |hole| hole.tees.as_slice())
        } else {
            self.tees.as_slice()
        };
        source.iter().map(|tee| tee.color.as_str()).collect()
    }

    fn front(&self) -> &[Hole] {
        &self.holes[..self.holes.len().min(NINE)]
    }

    fn back(&self) -> &[Hole] {
        &self.holes[self.holes.len().saturating_sub(NINE)..]
    }

    #[must_use]
    pub fn par(&self) -> i32 {
        self.holes.iter().map(Hole::par).sum()
    }

    #[must_use]
    pub fn front_par(&self) -> i32 {
        self.front().iter().map(Hole::par).sum()
    }

    #[must_use]
    pub fn back_par(&self) -> i32 {
        self.back().iter().map(Hole::par).sum()
    }

    #[must_use]
    pub fn par_total_for(&self, color: &str) -> i32 {
        self.holes.iter().map(|hole| hole.par_for(color)).sum()
    }

    #[must_use]
    pub fn yardage_total(&self, color: &str) -> u32 {
        self.holes.iter().map(|hole| hole.yardage(color)).sum()
    }

    #[must_use]
    pub fn front_yardage(&self, color: &str) -> u32 {
        self.front().iter().map(|hole| hole.yardage(color)).sum()
    }

    #[must_use]
    pub fn back_yardage(&self, color: &str) -> u32 {
        self.back().iter().map(|hole| hole.yardage(color)).sum()
    }

    #[must_use]
    pub fn totals(&self, color: &str) -> CourseTotals {
        CourseTotals {
            color: color.to_string(),
            front_yardage: self.front_yardage(color),
            back_yardage: self.back_yardage(color),
            total_yardage: self.yardage_total(color),
            front_par: self.front().iter().map(|hole| hole.par_for(color)).sum(),
            back_par: self.back().iter().map(|hole| hole.par_for(color)).sum(),
            total_par: self.par_total_for(color),
        }
    }

    #[must_use]
    pub fn all_totals(&self) -> Vec<CourseTotals> {
        self.tee_colors()
            .into_iter()
            .map(|color| self.totals(color))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_hole_course() -> Course {
        Course::new(
            "c1",
            "Three Holes",
            "1 Fairway Rd",
            vec![Tee::new("blue", 900, 12).with_rating(35.1, 110)],
            vec![
                Hole::new(3, vec![Tee::new("blue", 500, 5), Tee::new("red", 420, 5)]),
                Hole::new(1, vec![Tee::new("blue", 400, 4), Tee::new("red", 350, 4)]),
                Hole::new(2, vec![Tee::new("blue", 150, 3), Tee::new("red", 120, 3)]),
            ],
        )
    }

    #[test]
    fn holes_sorted_on_construction() {
        let course = three_hole_course();
        let numbers: Vec<u32> = course.holes().iter().map(|h| h.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn holes_sorted_when_deserialized() {
        let json = r#"{"id":"x","name":"X","holes":[
            {"number":2,"tees":[{"color":"white","yardage":100,"par":3}]},
            {"number":1,"tees":[{"color":"white","yardage":300,"par":4}]}
        ]}"#;
        let course: Course = serde_json::from_str(json).expect("course json");
        assert_eq!(course.holes()[0].number, 1);
        assert_eq!(course.address(), "");
        assert_eq!(course.tee_colors(), vec!["white"]);
    }

    #[test]
    fn short_course_totals() {
        let course = three_hole_course();
        assert_eq!(course.par(), 12);
        assert_eq!(course.front_par(), 12);
        // last nine entries of a three hole course is every hole
        assert_eq!(course.back_par(), 12);
        assert_eq!(course.yardage_total("red"), 890);
        assert_eq!(course.yardage_total("gold"), 0);
    }

    #[test]
    fn eighteen_hole_front_and_back_split() {
        let holes = (1..=18)
            .map(|n| {
                let par = if n <= 9 { 4 } else { 3 };
                Hole::new(n, vec![Tee::new("white", 100 * n, par)])
            })
            .collect();
        let course = Course::new("c18", "Eighteen", "", Vec::new(), holes);
        assert_eq!(course.front_par(), 36);
        assert_eq!(course.back_par(), 27);
        assert_eq!(course.par(), 63);
        let totals = course.totals("white");
        assert_eq!(totals.front_yardage, 4500);
        assert_eq!(totals.back_yardage, 12600);
        assert_eq!(totals.front_yardage + totals.back_yardage, totals.total_yardage);
    }

    #[test]
    fn equality_is_by_id() {
        let a = three_hole_course();
        let b = Course::new("c1", "Renamed", "", Vec::new(), Vec::new());
        assert_eq!(a, b);
    }
}
