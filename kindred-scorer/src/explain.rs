//! Per-item contribution breakdowns for recommended items.

use kindred_core::{ItemId, UserItemMatrix};

use crate::{Contribution, Neighbor};

/// Collect the neighbours who most contributed to an item's score.
///
/// Each neighbour who rated `item` yields a [`Contribution`] with
/// `similarity * rating` as its weight. The result is sorted descending by
/// contribution (ties broken by ascending user id) and truncated to
/// `top_n`. A cold item — one no neighbour rated — yields an empty vec, not
/// an error; callers must render empty explanations gracefully.
///
/// Explanations only describe items the target has not rated, so a
/// neighbour's entry is reported regardless of the target's own history.
#[must_use]
pub fn explain_item(
    matrix: &UserItemMatrix,
    neighbors: &[Neighbor],
    item: ItemId,
    top_n: usize,
) -> Vec<Contribution> {
    let mut contributions: Vec<Contribution> = neighbors
        .iter()
        .filter_map(|neighbor| {
            let rating = matrix.rating(neighbor.user, item)?;
            Some(Contribution {
                user: neighbor.user,
                rating,
                similarity: neighbor.similarity,
                contribution: neighbor.similarity * f64::from(rating),
            })
        })
        .collect();

    contributions.sort_by(|lhs, rhs| {
        rhs.contribution
            .total_cmp(&lhs.contribution)
            .then_with(|| lhs.user.cmp(&rhs.user))
    });
    contributions.truncate(top_n);
    contributions
}
