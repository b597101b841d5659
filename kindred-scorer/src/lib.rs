//! User-based collaborative filtering over a [`UserItemMatrix`].
//!
//! The crate provides the three engines of the recommendation pipeline:
//! - **Similarity**: cosine similarity between two users restricted to the
//!   items both have rated, and top-K neighbour selection.
//! - **Scoring**: similarity-weighted aggregation of neighbour ratings into
//!   per-item scores for items the target user has not seen.
//! - **Explanation**: per-item contribution breakdowns naming the neighbours
//!   whose ratings drove a recommendation.
//!
//! Every call is a pure function over a borrowed, immutable matrix; the only
//! failure mode is [`RecommendError::UserNotFound`]. Empty neighbour or
//! candidate sets propagate as empty sequences, never errors.
//!
//! # Examples
//!
//! ```
//! use kindred_core::{Rating, UserItemMatrix};
//! use kindred_scorer::{DEFAULT_K_NEIGHBORS, DEFAULT_TOP_N, recommend};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ratings = vec![
//!     Rating::new(1, 10, 5, 0)?,
//!     Rating::new(1, 11, 3, 0)?,
//!     Rating::new(2, 10, 5, 0)?,
//!     Rating::new(2, 11, 3, 0)?,
//!     Rating::new(2, 12, 4, 0)?,
//! ];
//! let matrix = UserItemMatrix::from_ratings(&ratings);
//! let recs = recommend(&matrix, 1, DEFAULT_TOP_N, DEFAULT_K_NEIGHBORS)?;
//! assert_eq!(recs.first().map(|r| r.item), Some(12));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use kindred_core::{UserId, UserItemMatrix};
use log::debug;

mod error;
mod explain;
mod scoring;
mod similarity;
mod types;

pub use error::RecommendError;
pub use explain::explain_item;
pub use scoring::{rank_scores, score_items};
pub use similarity::{cosine_on_overlap, top_k_neighbors};
pub use types::{Contribution, Neighbor, Recommendation};

/// Default number of neighbours considered per target user.
pub const DEFAULT_K_NEIGHBORS: usize = 30;

/// Default number of recommendations returned.
pub const DEFAULT_TOP_N: usize = 5;

/// Default number of contributions cited per recommendation.
pub const DEFAULT_EXPLANATIONS: usize = 3;

/// Run the full pipeline for one target user.
///
/// Selects the top `k_neighbors` neighbours, scores every item the target
/// has not rated, ranks the scores, and attaches up to
/// [`DEFAULT_EXPLANATIONS`] reason strings per recommended item. A target
/// with no positive-similarity neighbours receives an empty list.
///
/// # Errors
/// Returns [`RecommendError::UserNotFound`] when `target` has no row in the
/// matrix. The matrix is never modified.
pub fn recommend(
    matrix: &UserItemMatrix,
    target: UserId,
    top_n: usize,
    k_neighbors: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    let neighbors = top_k_neighbors(matrix, target, k_neighbors)?;
    if neighbors.is_empty() {
        debug!("user {target} has no positive-similarity neighbours");
        return Ok(Vec::new());
    }

    let scores = score_items(matrix, &neighbors, target)?;
    debug!(
        "user {target}: {} neighbours scored {} unseen items",
        neighbors.len(),
        scores.len()
    );

    let recommendations = rank_scores(&scores, top_n)
        .into_iter()
        .map(|(item, score)| {
            let reasons = explain_item(matrix, &neighbors, item, DEFAULT_EXPLANATIONS)
                .iter()
                .map(Contribution::reason)
                .collect();
            Recommendation {
                item,
                score,
                reasons,
            }
        })
        .collect();
    Ok(recommendations)
}
