use super::RoundStore;
use crate::catalog::{CourseStore, resolve};
use crate::error::CoreError;
use crate::model::Round;

/// Load saved rounds, newest first, resolving each round's course.
///
/// Rounds whose course reference had to be healed are written back so the
/// correction sticks. A failed write-back is logged and the healed round is
/// still returned.
///
/// # Errors
/// Returns an error if the store cannot list rounds.
pub async fn load_history<S>(store: &dyn RoundStore, catalog: &S) -> Result<Vec<Round>, CoreError>
where
    S: CourseStore + ?Sized,
{
    let mut rounds = store.list().await?;
    for round in &mut rounds {
        let original_id = round.course_id().clone();
        let (course_id, course_name) = round.course_ref_mut();
        let (_, how) = resolve(catalog, course_id, course_name);
        if how.rewrote_reference() {
            if let Err(e) = store.save(round).await {
                tracing::warn!(
                    round_id = %round.id(),
                    stale_id = %original_id,
                    "could not persist healed course reference: {e}"
                );
            }
        }
    }
    Ok(rounds)
}

/// History search: rounds whose course name or date string contains
/// `query`, ignoring case. A blank query keeps everything.
#[must_use]
pub fn filter_rounds<'r, S>(rounds: &'r [Round], catalog: &S, query: &str) -> Vec<&'r Round>
where
    S: CourseStore + ?Sized,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rounds.iter().collect();
    }
    rounds
        .iter()
        .filter(|round| {
            let mut course_id = round.course_id().clone();
            let mut course_name = round.course_name().to_string();
            let (course, _) = resolve(catalog, &mut course_id, &mut course_name);
            course.name().to_lowercase().contains(&needle)
                || round.date_string().to_lowercase().contains(&needle)
        })
        .collect()
}
