use async_trait::async_trait;
use std::error::Error;
use std::fmt;

use crate::model::{Round, RoundId};

mod history;
mod memory;
mod sqlite;

pub use history::{filter_rounds, load_history};
pub use memory::MemoryRoundStore;
pub use sqlite::SqliteRoundStore;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(format!("sqlite: {value}"))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::new(format!("round encoding: {value}"))
    }
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::new(format!("storage task failed: {value}"))
    }
}

/// Where finished rounds go. Implementations may do slow, fallible I/O;
/// callers get the error back and decide whether to retry.
#[async_trait]
pub trait RoundStore: Send + Sync {
    /// Insert or replace a round by id.
    async fn save(&self, round: &Round) -> Result<(), StorageError>;
    /// Remove a saved round. Unknown ids are an error.
    async fn delete(&self, id: RoundId) -> Result<(), StorageError>;
    async fn get(&self, id: RoundId) -> Result<Option<Round>, StorageError>;
    /// All saved rounds, newest first.
    async fn list(&self) -> Result<Vec<Round>, StorageError>;
}
