use std::collections::HashMap;

use crate::error::{Result, TableError};

use value::Value;

/// The `ItemReader` and `ItemWriter` traits implemented by file readers and writers
pub mod item;

/// Dynamically typed cell values
pub mod value;

/// Single cell snapshots
pub mod cell;

/// Row snapshots
pub mod row;

/// Column snapshots
pub mod column;

/// The table itself, with its row input type
pub mod table;

/// Shorthand row index designating the last row of a non-empty table.
pub const LAST_ROW: isize = -1;

/// A row as stored by a table: header to value.
///
/// A record may omit headers of the schema but never holds a key outside of it.
pub type Record = HashMap<String, Value>;

/// Resolves a row index against a sequence of `len` rows.
///
/// `-1` is the only negative index accepted and only when `len > 0`.
pub(crate) fn resolve_row_index(index: isize, len: usize) -> Result<usize> {
    let resolved = if index == LAST_ROW {
        len.checked_sub(1)
    } else {
        usize::try_from(index).ok().filter(|index| *index < len)
    };
    resolved.ok_or(TableError::InvalidIndex { index, len })
}
