//! Rating-store loader for the kindred engine.
//!
//! Responsibilities:
//! - Parse the MovieLens 100K delimited text resources into normalised
//!   rating and item tables.
//! - Own the dataset's immutable configuration (resource file names, genre
//!   flag layout, upstream URL).
//!
//! Boundaries:
//! - No domain rules (those live in `kindred-core`) and no network I/O; the
//!   dataset is expected on local disk.
//! - Parsing is strict: a malformed record aborts the whole load rather
//!   than producing a partial table.

#![forbid(unsafe_code)]

use camino::Utf8Path;
use kindred_core::{Item, Rating};
use log::debug;

mod error;
mod items;
mod ratings;

pub use error::DataError;
pub use items::load_items;
pub use ratings::load_ratings;

/// File name of the tab-separated ratings resource.
pub const RATINGS_FILE: &str = "u.data";

/// File name of the pipe-separated item metadata resource.
pub const ITEMS_FILE: &str = "u.item";

/// Upstream location of the dataset archive, for operator guidance only;
/// no download happens here.
pub const DATASET_URL: &str = "https://files.grouplens.org/datasets/movielens/ml-100k.zip";

/// Load both normalised tables from a dataset directory.
///
/// Reads [`RATINGS_FILE`] and [`ITEMS_FILE`] from `dir` and returns the
/// rating and item tables in source order.
///
/// # Errors
/// Returns [`DataError::MissingResource`] when either resource cannot be
/// read, or a parse variant when any record is malformed.
pub fn load_dataset(dir: &Utf8Path) -> Result<(Vec<Rating>, Vec<Item>), DataError> {
    let ratings = load_ratings(&dir.join(RATINGS_FILE))?;
    let items = load_items(&dir.join(ITEMS_FILE))?;
    debug!(
        "loaded {} ratings and {} items from {dir}",
        ratings.len(),
        items.len()
    );
    Ok((ratings, items))
}
