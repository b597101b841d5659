//! Sparse user-item rating matrix.
//!
//! The matrix maps each user to the items they rated. Absence of an entry
//! means "not rated"; no numeric sentinel is ever stored, because valid
//! ratings occupy the full 1–5 range a sentinel might collide with.

use std::collections::BTreeMap;

use crate::{ItemId, Rating, UserId};

/// The pivoted user-item rating matrix.
///
/// Rows are keyed by user id, columns by item id. Cells hold `f32` because
/// duplicate `(user, item)` ratings are collapsed to their arithmetic mean.
/// The matrix is a pure function of the ratings it was built from and is
/// read-only afterward, so sharing it across threads needs no locking.
///
/// `BTreeMap` storage gives deterministic ascending-id iteration, which the
/// scoring layer relies on for stable tie-breaking.
///
/// # Examples
///
/// ```
/// use kindred_core::{Rating, UserItemMatrix};
///
/// # fn main() -> Result<(), kindred_core::RatingError> {
/// let ratings = vec![
///     Rating::new(1, 10, 4, 0)?,
///     Rating::new(1, 11, 2, 0)?,
///     Rating::new(2, 10, 5, 0)?,
/// ];
/// let matrix = UserItemMatrix::from_ratings(&ratings);
/// assert_eq!(matrix.rating(1, 10), Some(4.0));
/// assert_eq!(matrix.rating(2, 11), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserItemMatrix {
    rows: BTreeMap<UserId, BTreeMap<ItemId, f32>>,
}

impl UserItemMatrix {
    /// Pivot a slice of ratings into the user-item matrix.
    ///
    /// When a user rated the same item more than once, the cell holds the
    /// arithmetic mean of those ratings rather than the last value seen.
    #[must_use]
    pub fn from_ratings(ratings: &[Rating]) -> Self {
        let mut sums: BTreeMap<UserId, BTreeMap<ItemId, (f64, u32)>> = BTreeMap::new();
        for rating in ratings {
            let (sum, count) = sums
                .entry(rating.user)
                .or_default()
                .entry(rating.item)
                .or_insert((0.0, 0));
            *sum += f64::from(rating.value);
            *count += 1;
        }

        let rows = sums
            .into_iter()
            .map(|(user, items)| {
                let row = items
                    .into_iter()
                    .map(|(item, (sum, count))| (item, (sum / f64::from(count)) as f32))
                    .collect();
                (user, row)
            })
            .collect();
        Self { rows }
    }

    /// Return a user's row of `(item, rating)` cells, if the user exists.
    #[must_use]
    pub fn row(&self, user: UserId) -> Option<&BTreeMap<ItemId, f32>> {
        self.rows.get(&user)
    }

    /// Return one cell, if the user rated the item.
    #[must_use]
    pub fn rating(&self, user: UserId, item: ItemId) -> Option<f32> {
        self.rows.get(&user).and_then(|row| row.get(&item)).copied()
    }

    /// Report whether the user has a row in the matrix.
    #[must_use]
    pub fn contains_user(&self, user: UserId) -> bool {
        self.rows.contains_key(&user)
    }

    /// Iterate over all user ids in ascending order.
    pub fn users(&self) -> impl Iterator<Item = UserId> + '_ {
        self.rows.keys().copied()
    }

    /// Iterate over `(user, row)` pairs in ascending user order.
    pub fn iter(&self) -> impl Iterator<Item = (UserId, &BTreeMap<ItemId, f32>)> {
        self.rows.iter().map(|(user, row)| (*user, row))
    }

    /// Number of user rows.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.rows.len()
    }

    /// Report whether the matrix holds no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn rating(user: UserId, item: ItemId, value: u8) -> Rating {
        Rating::new(user, item, value, 0).unwrap()
    }

    #[fixture]
    fn matrix() -> UserItemMatrix {
        UserItemMatrix::from_ratings(&[
            rating(1, 10, 4),
            rating(1, 11, 2),
            rating(2, 10, 5),
            rating(3, 12, 1),
        ])
    }

    #[rstest]
    fn keeps_only_source_cells(matrix: UserItemMatrix) {
        assert_eq!(matrix.rating(1, 10), Some(4.0));
        assert_eq!(matrix.rating(1, 12), None);
        assert_eq!(matrix.rating(2, 11), None);
    }

    #[rstest]
    fn duplicate_ratings_collapse_to_mean() {
        let matrix = UserItemMatrix::from_ratings(&[
            rating(1, 10, 2),
            rating(1, 10, 5),
        ]);
        assert_eq!(matrix.rating(1, 10), Some(3.5));
    }

    #[rstest]
    fn rows_index_every_distinct_user(matrix: UserItemMatrix) {
        let users: Vec<UserId> = matrix.users().collect();
        assert_eq!(users, vec![1, 2, 3]);
    }

    #[rstest]
    fn absent_user_has_no_row(matrix: UserItemMatrix) {
        assert!(!matrix.contains_user(99));
        assert!(matrix.row(99).is_none());
    }

    #[rstest]
    fn building_is_deterministic(matrix: UserItemMatrix) {
        let again = UserItemMatrix::from_ratings(&[
            rating(1, 10, 4),
            rating(1, 11, 2),
            rating(2, 10, 5),
            rating(3, 12, 1),
        ]);
        assert_eq!(matrix, again);
    }

    #[rstest]
    fn empty_input_yields_empty_matrix() {
        let matrix = UserItemMatrix::from_ratings(&[]);
        assert!(matrix.is_empty());
        assert_eq!(matrix.user_count(), 0);
    }
}
