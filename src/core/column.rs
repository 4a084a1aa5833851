use super::{resolve_row_index, value::Value};
use crate::error::Result;

/// A snapshot of one column across every row of a table.
///
/// Values are copied when the view is built, in row order. Mutating the table
/// afterwards does not update the view.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    header: String,
    values: Vec<Value>,
}

impl ColumnView {
    pub fn new(header: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            header: header.into(),
            values,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// All values of this column, one per row.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    /// Returns the value at `row`, where `-1` designates the last row.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidIndex`](crate::TableError::InvalidIndex) when `row`
    /// is outside the column.
    pub fn cell(&self, row: isize) -> Result<&Value> {
        let index = resolve_row_index(row, self.values.len())?;
        Ok(&self.values[index])
    }
}
