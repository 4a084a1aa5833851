use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    io::Read,
    path::Path,
};

use log::debug;

use super::{
    LAST_ROW, Record,
    cell::Cell,
    column::ColumnView,
    resolve_row_index,
    row::RowView,
    value::{EMPTY, Value},
};
use crate::{
    error::{Result, TableError},
    item::delimited::{
        delimited_reader::DelimitedItemReaderBuilder, incremental_writer::IncrementalWriter,
    },
};

/// Delimiter used when none is given.
pub const DEFAULT_DELIMITER: &str = ",";

/// A row handed to [`Table::insert_row`].
///
/// A positional row must provide exactly one value per header, in header
/// order. A keyed row may provide any subset of the headers; omitted headers
/// read as empty text.
///
/// # Examples
///
/// ```
/// use icsv::core::table::{RowInput, Table};
///
/// let mut table = Table::new(["five", "6", "onetwo"]);
/// table.insert_row([0, 1, 2])?;
/// table.insert_row(RowInput::keyed([("onetwo", "hello")]))?;
///
/// assert_eq!(table.get_row(-1)?.to_string(), ",,hello");
/// # Ok::<(), icsv::TableError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RowInput {
    Positional(Vec<Value>),
    Keyed(HashMap<String, Value>),
}

impl RowInput {
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        RowInput::Positional(values.into_iter().map(Into::into).collect())
    }

    pub fn keyed<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        RowInput::Keyed(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<V: Into<Value>> From<Vec<V>> for RowInput {
    fn from(values: Vec<V>) -> Self {
        RowInput::positional(values)
    }
}

impl<V: Into<Value>, const N: usize> From<[V; N]> for RowInput {
    fn from(values: [V; N]) -> Self {
        RowInput::positional(values)
    }
}

impl<K: Into<String>, V: Into<Value>> From<HashMap<K, V>> for RowInput {
    fn from(pairs: HashMap<K, V>) -> Self {
        RowInput::keyed(pairs)
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for RowInput {
    fn from(pairs: BTreeMap<K, V>) -> Self {
        RowInput::keyed(pairs)
    }
}

impl TryFrom<serde_json::Value> for RowInput {
    type Error = TableError;

    /// JSON arrays become positional rows and JSON objects keyed rows.
    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Array(values) => Ok(RowInput::positional(values)),
            serde_json::Value::Object(pairs) => Ok(RowInput::keyed(pairs)),
            other => Err(TableError::UnsupportedRowType(other.to_string())),
        }
    }
}

/// An in-memory table: an ordered list of headers and an ordered list of rows.
///
/// The position of a row in the table is its index. Wherever a row index is
/// accepted, [`LAST_ROW`] (`-1`) designates the last row of a non-empty table;
/// no other negative index is valid.
///
/// Views returned by the getters ([`RowView`], [`ColumnView`], [`Cell`]) are
/// snapshots and do not follow later mutations.
///
/// # Examples
///
/// ```
/// use icsv::core::table::Table;
///
/// let mut table = Table::new(["one", "two", "three"]);
/// table.insert_row([0, 0, 0])?;
/// table.insert_row([1, 0, 0])?;
/// table.insert_row([1, 1, 0])?;
///
/// let ones = table.filter(|_, _, value| *value == 1);
/// assert_eq!(ones.len(), 3);
/// assert_eq!((ones[0].row(), ones[0].header()), (1, "one"));
///
/// table.set_cell("three", "x", 0)?;
/// assert_eq!(table.to_string(), "one,two,three\n0,0,x\n1,0,0\n1,1,0");
/// # Ok::<(), icsv::TableError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    delimiter: String,
    records: Vec<Record>,
}

impl Table {
    /// Creates an empty table using the default `,` delimiter.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_delimiter(headers, DEFAULT_DELIMITER)
    }

    pub fn with_delimiter<I, S>(headers: I, delimiter: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            delimiter: delimiter.into(),
            records: Vec::new(),
        }
    }

    /// Parses a table from a delimited text file.
    ///
    /// When `headers` is `None` they are taken from the first line, which then
    /// requires `has_header_line`. Every parsed value is text. See
    /// [`DelimitedItemReaderBuilder`] for the parsing rules.
    ///
    /// # Errors
    ///
    /// - [`TableError::NotFound`] if `path` does not exist
    /// - [`TableError::EmptyDelimiter`] if `delimiter` is empty
    /// - [`TableError::SchemaUnknown`] if `headers` is `None` and `has_header_line` is false
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        headers: Option<Vec<String>>,
        delimiter: &str,
        has_header_line: bool,
    ) -> Result<Self> {
        let reader = Self::reader_builder(headers, delimiter, has_header_line).from_path(path)?;
        Self::from_records(reader.headers().to_vec(), delimiter, reader.records()?)
    }

    /// Same as [`Table::from_file`] for any readable source.
    pub fn from_reader<R: Read>(
        rdr: R,
        headers: Option<Vec<String>>,
        delimiter: &str,
        has_header_line: bool,
    ) -> Result<Self> {
        let reader = Self::reader_builder(headers, delimiter, has_header_line).from_reader(rdr)?;
        Self::from_records(reader.headers().to_vec(), delimiter, reader.records()?)
    }

    fn reader_builder(
        headers: Option<Vec<String>>,
        delimiter: &str,
        has_header_line: bool,
    ) -> DelimitedItemReaderBuilder {
        let builder = DelimitedItemReaderBuilder::new()
            .delimiter(delimiter)
            .has_header_line(has_header_line);
        match headers {
            Some(headers) => builder.headers(headers),
            None => builder,
        }
    }

    fn from_records(headers: Vec<String>, delimiter: &str, records: Vec<Record>) -> Result<Self> {
        debug!("Parsed {} rows for headers {:?}", records.len(), headers);
        Ok(Self {
            headers,
            delimiter: delimiter.to_string(),
            records,
        })
    }

    /// Writes every row of the table to `path` and returns the writer, which
    /// can keep appending rows to the same file.
    ///
    /// With `overwrite` enabled the file is rewritten even when the table has
    /// no rows, in which case it ends up empty.
    ///
    /// The writer takes ownership of the table; get it back with
    /// [`IncrementalWriter::into_table`], or copy it with
    /// [`IncrementalWriter::table`].
    ///
    /// # Errors
    ///
    /// - [`TableError::EmptyDelimiter`] if the table's delimiter is empty
    /// - [`TableError::AlreadyExists`] if `overwrite` is false and `path` exists
    pub fn write<P: AsRef<Path>>(
        self,
        path: P,
        include_header_line: bool,
        overwrite: bool,
    ) -> Result<IncrementalWriter> {
        IncrementalWriter::from_table(path, self, include_header_line, overwrite)
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The headers joined by the delimiter.
    pub fn header_line(&self) -> String {
        self.headers.join(&self.delimiter)
    }

    /// A view of every row, in row order.
    pub fn rows(&self) -> Vec<RowView> {
        self.records
            .iter()
            .map(|record| self.row_view(record))
            .collect()
    }

    /// Overwrites the value of `header` in the given row.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidIndex`] or [`TableError::UnknownHeader`].
    pub fn set_cell(&mut self, header: &str, value: impl Into<Value>, row: isize) -> Result<()> {
        let index = self.validate_row(row)?;
        self.validate_header(header)?;

        self.records[index].insert(header.to_string(), value.into());
        Ok(())
    }

    /// Appends a row to the table.
    ///
    /// # Errors
    ///
    /// - [`TableError::ArityMismatch`] if a positional row does not have one value per header
    /// - [`TableError::UnknownHeader`] if a keyed row holds a key outside of the headers
    pub fn insert_row(&mut self, items: impl Into<RowInput>) -> Result<()> {
        let record = match items.into() {
            RowInput::Positional(values) => {
                if values.len() != self.column_count() {
                    return Err(TableError::ArityMismatch {
                        expected: self.column_count(),
                        actual: values.len(),
                    });
                }
                self.headers.iter().cloned().zip(values).collect()
            }
            RowInput::Keyed(pairs) => {
                self.validate_keys(&pairs)?;
                pairs
            }
        };

        self.records.push(record);
        Ok(())
    }

    /// Removes a row; the rows after it move down by one.
    pub fn remove_row(&mut self, row: isize) -> Result<()> {
        let index = self.validate_row(row)?;
        self.records.remove(index);
        Ok(())
    }

    pub fn get_row(&self, row: isize) -> Result<RowView> {
        let index = self.validate_row(row)?;
        Ok(self.row_view(&self.records[index]))
    }

    pub fn get_column(&self, header: &str) -> Result<ColumnView> {
        self.validate_header(header)?;

        let values = self
            .records
            .iter()
            .map(|record| record.get(header).unwrap_or(&EMPTY).clone())
            .collect();
        Ok(ColumnView::new(header, values))
    }

    pub fn get_cell(&self, row: isize, header: &str) -> Result<Cell> {
        let index = self.validate_row(row)?;
        self.validate_header(header)?;

        let value = self.records[index].get(header).unwrap_or(&EMPTY).clone();
        Ok(Cell::new(index, header, value))
    }

    /// Position of `header` in the header list.
    pub fn header_index(&self, header: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|known| known == header)
            .ok_or_else(|| TableError::UnknownHeader(header.to_string()))
    }

    /// Header at position `index`.
    pub fn header_at(&self, index: usize) -> Result<&str> {
        self.headers
            .get(index)
            .map(String::as_str)
            .ok_or(TableError::InvalidIndex {
                index: isize::try_from(index).unwrap_or(isize::MAX),
                len: self.headers.len(),
            })
    }

    /// Returns every cell for which `predicate(row, header, value)` is true.
    ///
    /// Rows are visited in ascending order and, within a row, headers in
    /// declaration order; the returned cells follow the same order.
    pub fn filter<F>(&self, mut predicate: F) -> Vec<Cell>
    where
        F: FnMut(usize, &str, &Value) -> bool,
    {
        let mut cells = Vec::new();
        for (row, record) in self.records.iter().enumerate() {
            for header in &self.headers {
                let value = record.get(header).unwrap_or(&EMPTY);
                if predicate(row, header.as_str(), value) {
                    cells.push(Cell::new(row, header.as_str(), value.clone()));
                }
            }
        }
        cells
    }

    /// Replaces every cell by `transform(row, header, value)`, in the same
    /// order as [`Table::filter`].
    ///
    /// With `overwrite` the table itself is updated and returned. Otherwise
    /// the results go into an independent copy and the table is left untouched.
    pub fn map<F>(&mut self, mut transform: F, overwrite: bool) -> MapOutput<'_>
    where
        F: FnMut(usize, &str, &Value) -> Value,
    {
        if overwrite {
            Self::map_records(&self.headers, &mut self.records, &mut transform);
            MapOutput::Overwritten(self)
        } else {
            let mut copy = self.clone();
            Self::map_records(&copy.headers, &mut copy.records, &mut transform);
            MapOutput::Copied(copy)
        }
    }

    /// Fallible form of [`Table::map`]: the first error stops the traversal
    /// and is returned.
    ///
    /// With `overwrite` the results are computed into a copy first and only
    /// swapped into this table once every call succeeded, so a failing
    /// transform leaves the table unchanged.
    pub fn try_map<F, E>(
        &mut self,
        mut transform: F,
        overwrite: bool,
    ) -> std::result::Result<MapOutput<'_>, E>
    where
        F: FnMut(usize, &str, &Value) -> std::result::Result<Value, E>,
    {
        let mut records = self.records.clone();
        for (row, record) in records.iter_mut().enumerate() {
            for header in &self.headers {
                let value = transform(row, header.as_str(), record.get(header).unwrap_or(&EMPTY))?;
                record.insert(header.clone(), value);
            }
        }

        if overwrite {
            self.records = records;
            Ok(MapOutput::Overwritten(self))
        } else {
            Ok(MapOutput::Copied(Self {
                headers: self.headers.clone(),
                delimiter: self.delimiter.clone(),
                records,
            }))
        }
    }

    fn map_records<F>(headers: &[String], records: &mut [Record], transform: &mut F)
    where
        F: FnMut(usize, &str, &Value) -> Value,
    {
        for (row, record) in records.iter_mut().enumerate() {
            for header in headers {
                let value = transform(row, header.as_str(), record.get(header).unwrap_or(&EMPTY));
                record.insert(header.clone(), value);
            }
        }
    }

    fn row_view(&self, record: &Record) -> RowView {
        RowView::new(self.headers.clone(), record.clone(), self.delimiter.as_str())
    }

    fn validate_row(&self, row: isize) -> Result<usize> {
        resolve_row_index(row, self.records.len())
    }

    fn validate_keys(&self, pairs: &HashMap<String, Value>) -> Result<()> {
        let mut unknown: Vec<&str> = pairs
            .keys()
            .filter(|key| !self.headers.contains(*key))
            .map(String::as_str)
            .collect();
        if unknown.is_empty() {
            return Ok(());
        }
        unknown.sort_unstable();
        Err(TableError::UnknownHeader(unknown.join(", ")))
    }

    fn validate_header(&self, header: &str) -> Result<()> {
        self.header_index(header).map(|_| ())
    }

    /// The most recently inserted row.
    pub(crate) fn last_row(&self) -> Result<RowView> {
        self.get_row(LAST_ROW)
    }
}

impl fmt::Display for Table {
    /// Header line followed by every row line, separated by `\n`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header_line())?;
        for record in &self.records {
            write!(f, "\n{}", self.row_view(record))?;
        }
        Ok(())
    }
}

/// The table produced by [`Table::map`]: either the mapped table itself or a
/// mapped copy of it.
#[derive(Debug)]
pub enum MapOutput<'a> {
    Overwritten(&'a mut Table),
    Copied(Table),
}

impl MapOutput<'_> {
    pub fn table(&self) -> &Table {
        match self {
            MapOutput::Overwritten(table) => table,
            MapOutput::Copied(table) => table,
        }
    }

    /// Returns the copy, or `None` if the table was mapped in place.
    pub fn into_copy(self) -> Option<Table> {
        match self {
            MapOutput::Overwritten(_) => None,
            MapOutput::Copied(table) => Some(table),
        }
    }
}

impl std::ops::Deref for MapOutput<'_> {
    type Target = Table;

    fn deref(&self) -> &Table {
        self.table()
    }
}
