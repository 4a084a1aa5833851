use std::fmt;

use super::{
    Record,
    value::{EMPTY, Value},
};
use crate::error::{Result, TableError};

/// A snapshot of one row, read against the table's header order.
///
/// The view owns copies of the headers, the row record and the delimiter taken
/// when it was built. It is not kept in sync with the table: after the table is
/// mutated, a previously obtained view is stale.
///
/// Its [`Display`](fmt::Display) form is the text line written to files.
///
/// # Examples
///
/// ```
/// use icsv::core::table::Table;
///
/// let mut table = Table::new(["a", "b", "c"]);
/// table.insert_row([1, 2, 3])?;
///
/// let row = table.get_row(-1)?;
/// assert_eq!(row.to_string(), "1,2,3");
/// assert_eq!(*row.cell("b")?, 2);
/// # Ok::<(), icsv::TableError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    headers: Vec<String>,
    record: Record,
    delimiter: String,
}

impl RowView {
    pub fn new(headers: Vec<String>, record: Record, delimiter: impl Into<String>) -> Self {
        Self {
            headers,
            record,
            delimiter: delimiter.into(),
        }
    }

    /// Returns the value stored for `header`, or empty text if the row omits it.
    ///
    /// # Errors
    ///
    /// [`TableError::UnknownHeader`] if `header` is not part of the schema.
    pub fn cell(&self, header: &str) -> Result<&Value> {
        if !self.headers.iter().any(|known| known == header) {
            return Err(TableError::UnknownHeader(header.to_string()));
        }
        Ok(self.record.get(header).unwrap_or(&EMPTY))
    }

    /// The row values in header order, with empty text for absent headers.
    pub fn as_ordered_values(&self) -> Vec<Value> {
        self.headers
            .iter()
            .map(|header| self.record.get(header).unwrap_or(&EMPTY).clone())
            .collect()
    }

    /// An independent copy of the underlying record.
    ///
    /// Only the headers the record actually holds are present.
    pub fn as_mapping(&self) -> Record {
        self.record.clone()
    }

    /// Number of headers in the schema, not in the record.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

impl fmt::Display for RowView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, header) in self.headers.iter().enumerate() {
            if index > 0 {
                f.write_str(&self.delimiter)?;
            }
            write!(f, "{}", self.record.get(header).unwrap_or(&EMPTY))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::RowView;
    use crate::{
        TableError,
        core::{Record, value::Value},
    };

    fn partial_row() -> RowView {
        let mut record = Record::new();
        record.insert("b".to_string(), Value::from(2));
        RowView::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            record,
            "/",
        )
    }

    #[test]
    fn absent_headers_should_read_as_empty() {
        let row = partial_row();

        assert_eq!(*row.cell("a").unwrap(), "");
        assert_eq!(*row.cell("b").unwrap(), 2);
        assert_eq!(
            row.as_ordered_values(),
            vec![Value::default(), Value::from(2), Value::default()]
        );
        assert_eq!(row.to_string(), "/2/");
        assert_eq!(row.column_count(), 3);
    }

    #[test]
    fn unknown_header_should_fail() {
        let row = partial_row();
        assert!(matches!(row.cell("z"), Err(TableError::UnknownHeader(h)) if h == "z"));
    }

    #[test]
    fn mapping_should_be_isolated() {
        let row = partial_row();

        let mut mapping = row.as_mapping();
        assert_eq!(mapping.len(), 1);
        mapping.insert("a".to_string(), Value::from("changed"));

        assert_eq!(*row.cell("a").unwrap(), "");
        assert_eq!(row.as_mapping().len(), 1);
    }
}
