//! Parser for the tab-separated ratings resource.

use camino::Utf8Path;
use kindred_core::Rating;
use log::debug;

use crate::DataError;

/// Fields per rating record: user, item, rating, timestamp.
const RATING_FIELDS: usize = 4;

/// Load the ratings table from a `u.data`-format file.
///
/// Each line holds exactly four tab-separated numeric fields. Blank lines
/// are ignored; any other deviation aborts the load.
///
/// # Errors
/// Returns [`DataError::MissingResource`] when the file cannot be read, or
/// a parse variant for the first malformed record.
pub fn load_ratings(path: &Utf8Path) -> Result<Vec<Rating>, DataError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::MissingResource {
        path: path.to_path_buf(),
        source,
    })?;

    let mut ratings = Vec::new();
    for (index, record) in text.lines().enumerate() {
        if record.is_empty() {
            continue;
        }
        ratings.push(parse_record(path, index + 1, record)?);
    }
    debug!("parsed {} ratings from {path}", ratings.len());
    Ok(ratings)
}

fn parse_record(path: &Utf8Path, line: usize, record: &str) -> Result<Rating, DataError> {
    let fields: Vec<&str> = record.split('\t').collect();
    if fields.len() != RATING_FIELDS {
        return Err(DataError::FieldCount {
            path: path.to_path_buf(),
            line,
            expected: RATING_FIELDS,
            found: fields.len(),
        });
    }

    let user = parse_number(path, line, "user id", fields[0])?;
    let item = parse_number(path, line, "item id", fields[1])?;
    let value = parse_number(path, line, "rating", fields[2])?;
    let timestamp = parse_number(path, line, "timestamp", fields[3])?;

    Rating::new(user, item, value, timestamp).map_err(|source| DataError::InvalidRating {
        path: path.to_path_buf(),
        line,
        source,
    })
}

pub(crate) fn parse_number<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    path: &Utf8Path,
    line: usize,
    field: &'static str,
    value: &str,
) -> Result<T, DataError> {
    value.parse().map_err(|source| DataError::InvalidNumber {
        path: path.to_path_buf(),
        line,
        field,
        value: value.to_owned(),
        source,
    })
}
