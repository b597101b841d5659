//! Similarity-weighted aggregation of neighbour ratings.

use std::collections::BTreeMap;

use kindred_core::{ItemId, UserId, UserItemMatrix};

use crate::{Neighbor, RecommendError};

/// Accumulate weighted scores for every item the target has not rated.
///
/// For each neighbour and each item in that neighbour's row outside the
/// target's seen set, the item's score grows by `similarity * rating`. An
/// item reachable from several neighbours accumulates additively: popularity
/// among similar users raises the score, not just the average rating.
///
/// The returned map is unranked; use [`rank_scores`] to order and truncate
/// it. Targets whose neighbours rated nothing new receive an empty map.
///
/// # Errors
/// Returns [`RecommendError::UserNotFound`] when `target` has no row.
pub fn score_items(
    matrix: &UserItemMatrix,
    neighbors: &[Neighbor],
    target: UserId,
) -> Result<BTreeMap<ItemId, f64>, RecommendError> {
    let seen = matrix
        .row(target)
        .ok_or(RecommendError::UserNotFound { user: target })?;

    let mut scores: BTreeMap<ItemId, f64> = BTreeMap::new();
    for neighbor in neighbors {
        let Some(row) = matrix.row(neighbor.user) else {
            continue;
        };
        for (&item, &rating) in row {
            if seen.contains_key(&item) {
                continue;
            }
            *scores.entry(item).or_insert(0.0) += neighbor.similarity * f64::from(rating);
        }
    }
    Ok(scores)
}

/// Order a score map descending and keep the first `top_n` entries.
///
/// Equal scores are broken by ascending item id so the ranking is
/// deterministic across runs.
#[must_use]
pub fn rank_scores(scores: &BTreeMap<ItemId, f64>, top_n: usize) -> Vec<(ItemId, f64)> {
    let mut ranked: Vec<(ItemId, f64)> = scores.iter().map(|(&item, &score)| (item, score)).collect();
    ranked.sort_by(|lhs, rhs| rhs.1.total_cmp(&lhs.1).then_with(|| lhs.0.cmp(&rhs.0)));
    ranked.truncate(top_n);
    ranked
}
