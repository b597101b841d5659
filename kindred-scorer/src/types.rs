//! Public value types produced by the pipeline stages.

use kindred_core::{ItemId, UserId};
use serde::{Deserialize, Serialize};

/// A user with positive cosine similarity to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Identifier of the neighbouring user.
    pub user: UserId,
    /// Cosine similarity to the target over co-rated items; always > 0
    /// inside a neighbour list.
    pub similarity: f64,
}

/// One neighbour's share of a recommended item's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    /// Neighbour who rated the item.
    pub user: UserId,
    /// The neighbour's rating of the item.
    pub rating: f32,
    /// The neighbour's similarity to the target.
    pub similarity: f64,
    /// `similarity * rating`, the unit of explanation.
    pub contribution: f64,
}

impl Contribution {
    /// Render the contribution as a human-readable justification.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_scorer::Contribution;
    ///
    /// let contribution = Contribution {
    ///     user: 42,
    ///     rating: 5.0,
    ///     similarity: 0.876,
    ///     contribution: 4.38,
    /// };
    /// assert_eq!(contribution.reason(), "U42 rated 5.0 (sim 0.88)");
    /// ```
    #[must_use]
    pub fn reason(&self) -> String {
        format!(
            "U{} rated {:.1} (sim {:.2})",
            self.user, self.rating, self.similarity
        )
    }
}

/// A ranked recommendation with its justification set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommended item.
    pub item: ItemId,
    /// Accumulated similarity-weighted score.
    pub score: f64,
    /// Justifications from the top contributing neighbours; may be empty.
    pub reasons: Vec<String>,
}
