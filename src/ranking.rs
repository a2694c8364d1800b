use std::cmp::Ordering;

use tracing::debug;

use crate::{entities::movie, error::AppResult, store::MovieStore};

/// Ascending rating order with unrated records sorting lowest. The null
/// ordering is deliberately explicit here instead of leaning on the SQL
/// backend's default. Ratings compare via `total_cmp`, so this is a total
/// order even if a non-finite value ever reaches the store.
pub fn rating_order(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.total_cmp(&y),
    }
}

/// Re-derives a dense 1..=N ranking from current ratings and writes each
/// record back, one update per row. Runs on every list view, so repeated runs
/// over an unchanged set must produce identical rankings. Returns the records
/// best-first for display.
pub async fn recompute(store: &MovieStore) -> AppResult<Vec<movie::Model>> {
    // Stable sort over id order, so equal ratings keep their store order.
    let mut movies = store.list_all().await?;
    movies.sort_by(|a, b| rating_order(a.rating, b.rating));

    let total = movies.len();
    for (index, m) in movies.iter_mut().enumerate() {
        let ranking = (total - index) as i32;
        store.set_ranking(m.id, ranking).await?;
        m.ranking = Some(ranking);
    }

    debug!(records = total, "recomputed rankings");

    movies.reverse();
    Ok(movies)
}
