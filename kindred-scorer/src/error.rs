//! Error types raised by the recommendation pipeline.

use kindred_core::UserId;
use thiserror::Error;

/// Errors raised while computing recommendations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// The requested target user has no row in the rating matrix.
    #[error("user {user} not found in the rating matrix")]
    UserNotFound {
        /// Identifier that was requested.
        user: UserId,
    },
}
