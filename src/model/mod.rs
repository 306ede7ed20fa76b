pub mod course;
pub mod hole;
pub mod round;
pub mod score;
pub mod tee;
pub mod utils;

pub use course::{Course, CourseId, CourseTotals};
pub use hole::{Hole, HoleShape};
pub use round::{Round, RoundId};
pub use score::{ScoreDisplay, format_to_par};
pub use tee::Tee;
pub use utils::{format_round_date, format_round_duration};
