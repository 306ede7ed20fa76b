use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{RoundStore, StorageError};
use crate::model::{Round, RoundId};

pub type RoundMap = Arc<RwLock<HashMap<RoundId, Round>>>;

/// Volatile store, for `--store memory` and tests.
#[derive(Clone, Default)]
pub struct MemoryRoundStore {
    rounds: RoundMap,
}

impl MemoryRoundStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoundStore for MemoryRoundStore {
    async fn save(&self, round: &Round) -> Result<(), StorageError> {
        let mut map = self.rounds.write().await;
        map.insert(round.id(), round.clone());
        Ok(())
    }

    async fn delete(&self, id: RoundId) -> Result<(), StorageError> {
        let mut map = self.rounds.write().await;
        match map.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StorageError::new(format!("round {id} not found"))),
        }
    }

    async fn get(&self, id: RoundId) -> Result<Option<Round>, StorageError> {
        let map = self.rounds.read().await;
        Ok(map.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Round>, StorageError> {
        let map = self.rounds.read().await;
        let mut rounds: Vec<Round> = map.values().cloned().collect();
        rounds.sort_by(|a, b| b.date().cmp(&a.date()));
        Ok(rounds)
    }
}
