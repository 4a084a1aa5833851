use super::value::Value;

/// A snapshot of one cell: the row it was found in, its column header and its value.
///
/// The row index is always absolute; the `-1` shorthand is resolved before a
/// cell is built. A cell keeps no link to the table it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    row: usize,
    header: String,
    value: Value,
}

impl Cell {
    pub fn new(row: usize, header: impl Into<String>, value: Value) -> Self {
        Self {
            row,
            header: header.into(),
            value,
        }
    }

    /// Index of the row where this cell is located.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column header where this cell is located.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}
