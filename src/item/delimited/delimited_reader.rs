use std::{
    cell::RefCell,
    fs,
    io::Read,
    path::Path,
    vec::IntoIter,
};

use log::debug;

use crate::{
    core::{
        Record,
        item::{ItemReader, ItemReaderResult},
        table::DEFAULT_DELIMITER,
        value::Value,
    },
    error::{Result, TableError},
};

/// A reader that turns delimited text into row records, one line at a time.
///
/// The whole source is read up front. Its content is trimmed and split on
/// `\n`; every line is trimmed again and split on the delimiter. There is no
/// quoting: a delimiter inside a value always starts a new field.
///
/// Fields are paired with the headers by position. A line with fewer fields
/// than headers leaves the trailing headers out of its record; fields beyond
/// the last header are dropped. Every value is [`Value::Text`].
///
/// # Examples
///
/// ```
/// use icsv::item::delimited::delimited_reader::DelimitedItemReaderBuilder;
/// use icsv::core::item::ItemReader;
///
/// let reader = DelimitedItemReaderBuilder::new()
///     .delimiter(";")
///     .from_reader("name;age\nAlice;30\nBob".as_bytes())?;
///
/// assert_eq!(reader.headers(), ["name", "age"]);
///
/// let alice = reader.read()?.unwrap();
/// assert_eq!(alice["age"], "30");
///
/// let bob = reader.read()?.unwrap();
/// assert!(!bob.contains_key("age"));
///
/// assert!(reader.read()?.is_none());
/// # Ok::<(), icsv::TableError>(())
/// ```
pub struct DelimitedItemReader {
    headers: Vec<String>,
    delimiter: String,
    lines: RefCell<IntoIter<String>>,
}

impl DelimitedItemReader {
    /// Headers the records are keyed by, given or read from the first line.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Reads every remaining record.
    pub fn records(&self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        while let Some(record) = self.read()? {
            records.push(record);
        }
        Ok(records)
    }

    fn to_record(&self, line: &str) -> Record {
        self.headers
            .iter()
            .cloned()
            .zip(line.split(self.delimiter.as_str()).map(Value::from))
            .collect()
    }
}

impl ItemReader<Record> for DelimitedItemReader {
    fn read(&self) -> ItemReaderResult<Record> {
        let line = self.lines.borrow_mut().next();
        Ok(line.map(|line| self.to_record(&line)))
    }
}

/// A builder for configuring delimited text reading.
///
/// # Default Configuration
///
/// - Delimiter: comma (,)
/// - Headers: read from the first line
/// - Header line: present
#[derive(Debug, Clone)]
pub struct DelimitedItemReaderBuilder {
    delimiter: String,
    headers: Option<Vec<String>>,
    has_header_line: bool,
}

impl Default for DelimitedItemReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DelimitedItemReaderBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            headers: None,
            has_header_line: true,
        }
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Uses the given headers instead of reading them from the first line.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Sets whether the first line holds the headers.
    ///
    /// When enabled, the first line is never returned as a record, even if
    /// explicit headers were given.
    pub fn has_header_line(mut self, yes: bool) -> Self {
        self.has_header_line = yes;
        self
    }

    /// Creates a reader from a file path.
    ///
    /// # Errors
    ///
    /// - [`TableError::NotFound`] if the file does not exist
    /// - [`TableError::EmptyDelimiter`] if the delimiter is empty
    /// - [`TableError::SchemaUnknown`] if the headers can not be determined
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<DelimitedItemReader> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TableError::NotFound(path.to_path_buf()));
        }
        self.check_config()?;

        debug!("Reading delimited file {}", path.display());
        let content = fs::read_to_string(path)?;
        self.build(&content)
    }

    /// Creates a reader from any readable source.
    pub fn from_reader<R: Read>(self, mut rdr: R) -> Result<DelimitedItemReader> {
        self.check_config()?;

        let mut content = String::new();
        rdr.read_to_string(&mut content)?;
        self.build(&content)
    }

    fn check_config(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(TableError::EmptyDelimiter);
        }
        if self.headers.is_none() && !self.has_header_line {
            return Err(TableError::SchemaUnknown);
        }
        Ok(())
    }

    fn build(self, content: &str) -> Result<DelimitedItemReader> {
        let content = content.trim();
        let mut lines: Vec<String> = if content.is_empty() {
            Vec::new()
        } else {
            content
                .split('\n')
                .map(|line| line.trim().to_string())
                .collect()
        };

        let headers = match self.headers {
            Some(headers) => headers,
            // First line split once on the delimiter
            None => lines
                .first()
                .ok_or(TableError::SchemaUnknown)?
                .split(self.delimiter.as_str())
                .map(str::to_string)
                .collect(),
        };

        if self.has_header_line && !lines.is_empty() {
            lines.remove(0);
        }
        debug!("{} data lines found", lines.len());

        Ok(DelimitedItemReader {
            headers,
            delimiter: self.delimiter,
            lines: RefCell::new(lines.into_iter()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error, fs};

    use tempfile::TempDir;

    use super::DelimitedItemReaderBuilder;
    use crate::{TableError, core::value::Value};

    #[test]
    fn records_should_pair_fields_with_headers() -> Result<(), Box<dyn Error>> {
        let reader = DelimitedItemReaderBuilder::new()
            .headers(["a", "b", "c"])
            .has_header_line(false)
            .from_reader("  1,2,3  \n4,5\n6,7,8,9\n".as_bytes())?;

        let records = reader.records()?;
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["c"], Value::from("3"));
        assert_eq!(records[1].len(), 2);
        assert!(!records[1].contains_key("c"));
        assert_eq!(records[2].len(), 3);
        assert_eq!(records[2]["c"], "8");

        Ok(())
    }

    #[test]
    fn headers_should_come_from_the_first_line() -> Result<(), Box<dyn Error>> {
        let reader = DelimitedItemReaderBuilder::new()
            .delimiter("/")
            .from_reader("x/y\n1/2".as_bytes())?;

        assert_eq!(reader.headers(), ["x", "y"]);
        assert_eq!(reader.records()?.len(), 1);

        Ok(())
    }

    #[test]
    fn header_line_is_skipped_with_explicit_headers() -> Result<(), Box<dyn Error>> {
        let reader = DelimitedItemReaderBuilder::new()
            .headers(["p", "q"])
            .from_reader("x,y\n1,2".as_bytes())?;

        assert_eq!(reader.headers(), ["p", "q"]);
        let records = reader.records()?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["p"], "1");

        Ok(())
    }

    #[test]
    fn missing_schema_should_fail() {
        let result = DelimitedItemReaderBuilder::new()
            .has_header_line(false)
            .from_reader("1,2".as_bytes());
        assert!(matches!(result, Err(TableError::SchemaUnknown)));

        let result = DelimitedItemReaderBuilder::new().from_reader("  \n ".as_bytes());
        assert!(matches!(result, Err(TableError::SchemaUnknown)));
    }

    #[test]
    fn empty_delimiter_should_fail() {
        let result = DelimitedItemReaderBuilder::new()
            .delimiter("")
            .from_reader("ab\ncd".as_bytes());
        assert!(matches!(result, Err(TableError::EmptyDelimiter)));

        let result = DelimitedItemReaderBuilder::new()
            .delimiter("")
            .headers(["a"])
            .from_reader("ab\ncd".as_bytes());
        assert!(matches!(result, Err(TableError::EmptyDelimiter)));
    }

    #[test]
    fn missing_file_should_fail() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.csv");

        let result = DelimitedItemReaderBuilder::new().from_path(&path);
        assert!(matches!(result, Err(TableError::NotFound(p)) if p == path));
    }

    #[test]
    fn file_should_be_read() -> Result<(), Box<dyn Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("cities.csv");
        fs::write(&path, "city,country\nBoston,United States\n")?;

        let reader = DelimitedItemReaderBuilder::new().from_path(&path)?;
        let records = reader.records()?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["country"], "United States");

        Ok(())
    }
}
