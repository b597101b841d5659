//! Parser for the pipe-separated item metadata resource.

use camino::Utf8Path;
use kindred_core::{Genre, Item};
use log::debug;

use crate::DataError;
use crate::ratings::parse_number;

/// Fields per item record: id, title, release date, video release date,
/// IMDb URL, then one binary flag per genre.
const ITEM_FIELDS: usize = 5 + Genre::COUNT;

/// First genre flag column within a record.
const FIRST_FLAG: usize = 5;

/// Load the item table from a `u.item`-format file.
///
/// The resource is Latin-1 encoded. Each line holds exactly 24
/// pipe-separated fields; the 19 trailing binary flags are decoded
/// positionally against the fixed genre table. A record with every flag
/// cleared yields an item with an empty genre list.
///
/// # Errors
/// Returns [`DataError::MissingResource`] when the file cannot be read, or
/// a parse variant for the first malformed record.
pub fn load_items(path: &Utf8Path) -> Result<Vec<Item>, DataError> {
    let bytes = std::fs::read(path).map_err(|source| DataError::MissingResource {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_latin1(&bytes);

    let mut items = Vec::new();
    for (index, record) in text.lines().enumerate() {
        if record.is_empty() {
            continue;
        }
        items.push(parse_record(path, index + 1, record)?);
    }
    debug!("parsed {} items from {path}", items.len());
    Ok(items)
}

/// Latin-1 maps every byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

fn parse_record(path: &Utf8Path, line: usize, record: &str) -> Result<Item, DataError> {
    let fields: Vec<&str> = record.split('|').collect();
    if fields.len() != ITEM_FIELDS {
        return Err(DataError::FieldCount {
            path: path.to_path_buf(),
            line,
            expected: ITEM_FIELDS,
            found: fields.len(),
        });
    }

    let id = parse_number(path, line, "item id", fields[0])?;
    let genres = parse_genre_flags(path, line, &fields[FIRST_FLAG..])?;

    Item::new(id, fields[1], genres).map_err(|source| DataError::InvalidItem {
        path: path.to_path_buf(),
        line,
        source,
    })
}

fn parse_genre_flags(
    path: &Utf8Path,
    line: usize,
    flags: &[&str],
) -> Result<Vec<Genre>, DataError> {
    let mut genres = Vec::new();
    for (column, &flag) in flags.iter().enumerate() {
        match flag {
            "0" => {}
            "1" => {
                // The column count is pinned to the table size above, so
                // positional lookup cannot miss.
                if let Ok(genre) = Genre::from_index(column) {
                    genres.push(genre);
                }
            }
            other => {
                return Err(DataError::InvalidGenreFlag {
                    path: path.to_path_buf(),
                    line,
                    column,
                    value: other.to_owned(),
                });
            }
        }
    }
    Ok(genres)
}
