use thiserror::Error;

use crate::model::Round;
use crate::session::RoundSession;
use crate::storage::{RoundStore, StorageError};

/// A completed round the store refused. The round is already finalized and
/// out of the session; it is carried here so the caller can retry the save.
#[derive(Error, Debug)]
#[error("failed to save round {}: {source}", .round.id())]
pub struct FinishError {
    pub round: Round,
    #[source]
    pub source: StorageError,
}

/// Hand a finalized round to the store.
///
/// # Errors
/// Returns the round back inside [`FinishError`] when the store fails.
pub async fn save_completed(round: Round, store: &dyn RoundStore) -> Result<Round, FinishError> {
    match store.save(&round).await {
        Ok(()) => {
            tracing::info!(round_id = %round.id(), "round saved");
            Ok(round)
        }
        Err(source) => {
            tracing::error!(round_id = %round.id(), "round save failed: {source}");
            Err(FinishError { round, source })
        }
    }
}

/// Complete the active round and save it. `Ok(None)` when nothing was active.
///
/// The session goes idle before the save is attempted and stays idle when
/// the save fails.
///
/// # Errors
/// Returns [`FinishError`] with the finalized round if the store fails.
pub async fn finish_round(
    session: &mut RoundSession,
    store: &dyn RoundStore,
) -> Result<Option<Round>, FinishError> {
    let Some(round) = session.complete() else {
        return Ok(None);
    };
    save_completed(round, store).await.map(Some)
}

/// Remove a saved round.
///
/// # Errors
/// Returns the store's error, including for ids it does not hold.
pub async fn delete_round(round: &Round, store: &dyn RoundStore) -> Result<(), StorageError> {
    store.delete(round.id()).await.inspect(|_| {
        tracing::info!(round_id = %round.id(), "round deleted");
    })
}
