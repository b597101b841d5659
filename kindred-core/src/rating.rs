use thiserror::Error;

use crate::{ItemId, UserId};

/// A single rating event from the source dataset.
///
/// Ratings are immutable once loaded. The same `(user, item)` pair may
/// appear more than once in the source data; aggregation happens when the
/// [`UserItemMatrix`](crate::UserItemMatrix) is built, not here.
///
/// # Examples
///
/// ```
/// use kindred_core::Rating;
///
/// # fn main() -> Result<(), kindred_core::RatingError> {
/// let rating = Rating::new(196, 242, 3, 881_250_949)?;
/// assert_eq!(rating.user, 196);
/// assert_eq!(rating.value, 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    /// User who issued the rating.
    pub user: UserId,
    /// Rated item.
    pub item: ItemId,
    /// Rating value on the 1–5 scale.
    pub value: u8,
    /// Moment the rating was recorded, in epoch seconds.
    pub timestamp: i64,
}

/// Errors returned by [`Rating::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    /// The user id was zero; valid ids start at 1.
    #[error("rating user id must be at least 1")]
    ZeroUserId,
    /// The item id was zero; valid ids start at 1.
    #[error("rating item id must be at least 1")]
    ZeroItemId,
    /// The rating value fell outside the 1–5 scale.
    #[error("rating value {value} is outside the 1-5 scale")]
    ValueOutOfRange {
        /// Value found in the source record.
        value: u8,
    },
}

impl Rating {
    /// Validates and constructs a [`Rating`].
    ///
    /// # Errors
    /// Returns [`RatingError`] when either id is zero or the value is not on
    /// the 1–5 scale.
    pub const fn new(
        user: UserId,
        item: ItemId,
        value: u8,
        timestamp: i64,
    ) -> Result<Self, RatingError> {
        if user == 0 {
            return Err(RatingError::ZeroUserId);
        }
        if item == 0 {
            return Err(RatingError::ZeroItemId);
        }
        if value < 1 || value > 5 {
            return Err(RatingError::ValueOutOfRange { value });
        }
        Ok(Self {
            user,
            item,
            value,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(5)]
    fn accepts_boundary_values(#[case] value: u8) {
        assert!(Rating::new(1, 1, value, 0).is_ok());
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    fn rejects_out_of_scale_values(#[case] value: u8) {
        assert_eq!(
            Rating::new(1, 1, value, 0),
            Err(RatingError::ValueOutOfRange { value })
        );
    }

    #[rstest]
    fn rejects_zero_ids() {
        assert_eq!(Rating::new(0, 1, 3, 0), Err(RatingError::ZeroUserId));
        assert_eq!(Rating::new(1, 0, 3, 0), Err(RatingError::ZeroItemId));
    }
}
