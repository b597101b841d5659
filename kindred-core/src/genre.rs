//! Genres describing the fixed MovieLens category set.
//!
//! The dataset encodes genres as 19 positional binary flags; the enum
//! offers compile-time safety for positional lookups and display names.
//!
//! # Examples
//! ```
//! use kindred_core::Genre;
//!
//! assert_eq!(Genre::from_index(0), Ok(Genre::Unknown));
//! assert_eq!(Genre::Western.as_str(), "Western");
//! assert_eq!(Genre::SciFi.to_string(), "Sci-Fi");
//! ```

use thiserror::Error;

/// A genre label from the dataset's fixed 19-value enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    /// Catch-all for items without a concrete genre.
    Unknown,
    /// Action films.
    Action,
    /// Adventure films.
    Adventure,
    /// Animated films.
    Animation,
    /// Children's films.
    Childrens,
    /// Comedies.
    Comedy,
    /// Crime films.
    Crime,
    /// Documentaries.
    Documentary,
    /// Dramas.
    Drama,
    /// Fantasy films.
    Fantasy,
    /// Film noir.
    FilmNoir,
    /// Horror films.
    Horror,
    /// Musicals.
    Musical,
    /// Mysteries.
    Mystery,
    /// Romances.
    Romance,
    /// Science fiction.
    SciFi,
    /// Thrillers.
    Thriller,
    /// War films.
    War,
    /// Westerns.
    Western,
}

/// Errors returned when resolving genres from source data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenreError {
    /// The flag column index was outside the fixed table.
    #[error("genre index {index} is outside the fixed table of {count} genres")]
    IndexOutOfRange {
        /// Offending column index.
        index: usize,
        /// Size of the fixed genre table.
        count: usize,
    },
    /// The genre name did not match any table entry.
    #[error("unknown genre name '{name}'")]
    UnknownName {
        /// Name found in the input.
        name: String,
    },
}

impl Genre {
    /// Number of genres in the fixed table.
    pub const COUNT: usize = 19;

    /// Every genre in flag-column order, `Unknown` first through `Western`.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Unknown,
        Self::Action,
        Self::Adventure,
        Self::Animation,
        Self::Childrens,
        Self::Comedy,
        Self::Crime,
        Self::Documentary,
        Self::Drama,
        Self::Fantasy,
        Self::FilmNoir,
        Self::Horror,
        Self::Musical,
        Self::Mystery,
        Self::Romance,
        Self::SciFi,
        Self::Thriller,
        Self::War,
        Self::Western,
    ];

    /// Resolve a genre from its flag-column position.
    ///
    /// # Errors
    /// Returns [`GenreError::IndexOutOfRange`] for indices past the table.
    pub fn from_index(index: usize) -> Result<Self, GenreError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GenreError::IndexOutOfRange {
                index,
                count: Self::COUNT,
            })
    }

    /// Return the genre's dataset display name.
    ///
    /// # Examples
    /// ```
    /// use kindred_core::Genre;
    ///
    /// assert_eq!(Genre::Childrens.as_str(), "Children's");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Animation => "Animation",
            Self::Childrens => "Children's",
            Self::Comedy => "Comedy",
            Self::Crime => "Crime",
            Self::Documentary => "Documentary",
            Self::Drama => "Drama",
            Self::Fantasy => "Fantasy",
            Self::FilmNoir => "Film-Noir",
            Self::Horror => "Horror",
            Self::Musical => "Musical",
            Self::Mystery => "Mystery",
            Self::Romance => "Romance",
            Self::SciFi => "Sci-Fi",
            Self::Thriller => "Thriller",
            Self::War => "War",
            Self::Western => "Western",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Genre {
    type Err = GenreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|genre| genre.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GenreError::UnknownName {
                name: s.to_owned(),
            })
    }
}
