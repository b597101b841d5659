use thiserror::Error;

use crate::{Genre, ItemId};

/// Metadata for a rateable item.
///
/// Genres keep the flag-column order from the source data. An item may
/// legitimately carry no genres at all: a metadata row with every flag
/// cleared yields an empty list.
///
/// # Examples
///
/// ```
/// use kindred_core::{Genre, Item};
///
/// # fn main() -> Result<(), kindred_core::ItemError> {
/// let item = Item::new(1, "Toy Story (1995)", vec![Genre::Animation, Genre::Comedy])?;
/// assert_eq!(item.genre_label(), "Animation|Comedy");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Human-readable title.
    pub title: String,
    /// Genres in flag-column order; may be empty.
    pub genres: Vec<Genre>,
}

/// Errors returned by [`Item::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    /// The item id was zero; valid ids start at 1.
    #[error("item id must be at least 1")]
    ZeroId,
    /// The title column was empty.
    #[error("item {id} has an empty title")]
    EmptyTitle {
        /// Identifier of the affected item.
        id: ItemId,
    },
}

impl Item {
    /// Validates and constructs an [`Item`].
    ///
    /// # Errors
    /// Returns [`ItemError`] when the id is zero or the title is empty.
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        genres: Vec<Genre>,
    ) -> Result<Self, ItemError> {
        if id == 0 {
            return Err(ItemError::ZeroId);
        }
        let title = title.into();
        if title.is_empty() {
            return Err(ItemError::EmptyTitle { id });
        }
        Ok(Self { id, title, genres })
    }

    /// Join the genre names with `|`, matching the dataset's conventions.
    #[must_use]
    pub fn genre_label(&self) -> String {
        self.genres
            .iter()
            .map(|genre| genre.as_str())
            .collect::<Vec<_>>()
            .join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn rejects_zero_id() {
        assert_eq!(Item::new(0, "Heat (1995)", vec![]), Err(ItemError::ZeroId));
    }

    #[rstest]
    fn rejects_empty_title() {
        assert_eq!(
            Item::new(7, "", vec![]),
            Err(ItemError::EmptyTitle { id: 7 })
        );
    }

    #[rstest]
    fn allows_empty_genre_list() {
        let item = Item::new(7, "unknown", vec![]).unwrap();
        assert!(item.genres.is_empty());
        assert_eq!(item.genre_label(), "");
    }

    #[rstest]
    fn joins_genres_with_pipes() {
        let item = Item::new(56, "Pulp Fiction (1994)", vec![Genre::Crime, Genre::Drama]).unwrap();
        assert_eq!(item.genre_label(), "Crime|Drama");
    }
}
