pub mod args;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod session;
pub mod storage;
pub mod view;

pub use catalog::{CourseCatalog, CourseStore, Resolution, resolve, resolve_course};
pub use controller::AppState;
pub use error::CoreError;
pub use session::{HoleHandle, MAX_STROKES, MIN_STROKES, RoundSession};
pub use storage::{MemoryRoundStore, RoundStore, SqliteRoundStore, StorageError};
