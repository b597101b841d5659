//! Cosine similarity over co-rated items and top-K neighbour selection.

use std::collections::BTreeMap;

use kindred_core::{ItemId, UserId, UserItemMatrix};

use crate::{Neighbor, RecommendError};

/// Overlap sets smaller than this carry no usable signal.
const MIN_OVERLAP: usize = 2;

/// Cosine similarity between two rating rows, restricted to the overlap set.
///
/// Only items present in both rows enter the dot product and the Euclidean
/// norms. An overlap of fewer than [`MIN_OVERLAP`] items, or a zero norm on
/// either side, yields exactly `0.0` rather than an error.
///
/// The function is symmetric: `cosine_on_overlap(a, b)` equals
/// `cosine_on_overlap(b, a)` for all rows.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use kindred_scorer::cosine_on_overlap;
///
/// let a = BTreeMap::from([(1, 4.0_f32), (2, 2.0), (3, 5.0)]);
/// let b = BTreeMap::from([(1, 4.0_f32), (2, 2.0), (9, 1.0)]);
/// let sim = cosine_on_overlap(&a, &b);
/// assert!((sim - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn cosine_on_overlap(a: &BTreeMap<ItemId, f32>, b: &BTreeMap<ItemId, f32>) -> f64 {
    let mut overlap = 0_usize;
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    // Iterate the smaller row and probe the larger one. Dot product and
    // norm product are both symmetric, so the orientation does not matter.
    let (outer, inner) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    for (item, &outer_value) in outer {
        let Some(&inner_value) = inner.get(item) else {
            continue;
        };
        let va = f64::from(outer_value);
        let vb = f64::from(inner_value);
        overlap += 1;
        dot += va * vb;
        norm_a += va * va;
        norm_b += vb * vb;
    }

    if overlap < MIN_OVERLAP {
        return 0.0;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 { 0.0 } else { dot / denom }
}

/// Rank every other user against `target` and return the top `k`.
///
/// Only candidates with similarity strictly greater than zero are retained.
/// Results are sorted descending by similarity; equal similarities are
/// broken by ascending user id so the ordering is deterministic. When fewer
/// than `k` users qualify, all of them are returned.
///
/// Complexity is O(U × I) over the user count and average row length; at
/// dataset scale (hundreds of users) no index structure is warranted.
///
/// # Errors
/// Returns [`RecommendError::UserNotFound`] when `target` has no row.
pub fn top_k_neighbors(
    matrix: &UserItemMatrix,
    target: UserId,
    k: usize,
) -> Result<Vec<Neighbor>, RecommendError> {
    let target_row = matrix
        .row(target)
        .ok_or(RecommendError::UserNotFound { user: target })?;

    let mut neighbors: Vec<Neighbor> = matrix
        .iter()
        .filter(|(user, _)| *user != target)
        .filter_map(|(user, row)| {
            let similarity = cosine_on_overlap(target_row, row);
            (similarity > 0.0).then_some(Neighbor { user, similarity })
        })
        .collect();

    neighbors.sort_by(|lhs, rhs| {
        rhs.similarity
            .total_cmp(&lhs.similarity)
            .then_with(|| lhs.user.cmp(&rhs.user))
    });
    neighbors.truncate(k);
    Ok(neighbors)
}
