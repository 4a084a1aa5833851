use std::{
    cell::{Cell, RefCell},
    fmt,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    core::{
        item::ItemWriter,
        table::{DEFAULT_DELIMITER, RowInput, Table},
    },
    error::{Result, TableError},
};

/// A writer that appends rows to a delimited text file as soon as they are added.
///
/// The writer owns a [`Table`] mirroring what it wrote. Every call to
/// [`IncrementalWriter::write_row`] inserts the row into that table and then
/// writes exactly that row to disk, opening and closing the file for each line.
///
/// # Write modes
///
/// Only the first physical write of a writer may truncate the file, and only
/// when `overwrite` is enabled; every later write appends. When the header
/// line is enabled it is written once, right before the first data line.
/// A writer built by [`IncrementalWriter::new`] touches the disk only when a
/// row is written. [`IncrementalWriter::from_table`] with `overwrite` enabled
/// always rewrites the file, leaving it empty when the table has no rows.
///
/// Several writers addressing the same file interleave their lines in an
/// unspecified order.
///
/// # Examples
///
/// ```
/// use icsv::item::delimited::incremental_writer::IncrementalWriter;
/// use icsv::core::table::RowInput;
/// use std::fs;
///
/// # fn main() -> Result<(), icsv::TableError> {
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("numbers.csv");
///
/// let writer = IncrementalWriter::new(&path, ["five", "6", "onetwo"])?;
/// writer.write_row([0, 1, 2])?;
/// assert_eq!(fs::read_to_string(&path)?, "five,6,onetwo\n0,1,2\n");
///
/// writer.write_row(RowInput::keyed([("onetwo", "hello")]))?;
/// assert_eq!(fs::read_to_string(&path)?, "five,6,onetwo\n0,1,2\n,,hello\n");
/// # Ok(())
/// # }
/// ```
pub struct IncrementalWriter {
    path: PathBuf,
    table: RefCell<Table>,
    include_header_line: bool,
    overwrite: bool,
    first_write: Cell<bool>,
}

impl IncrementalWriter {
    /// Creates a writer with the default options: `,` delimiter, header line
    /// written, existing file overwritten.
    pub fn new<P, I, S>(path: P, headers: I) -> Result<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IncrementalWriterBuilder::new().from_path(path, headers)
    }

    /// Takes ownership of `table` and writes each of its rows to `path`, in
    /// row order. The returned writer keeps appending to the same file.
    ///
    /// # Errors
    ///
    /// [`TableError::AlreadyExists`] if `overwrite` is false and `path` exists.
    pub fn from_table<P: AsRef<Path>>(
        path: P,
        table: Table,
        include_header_line: bool,
        overwrite: bool,
    ) -> Result<Self> {
        IncrementalWriterBuilder::new()
            .include_header_line(include_header_line)
            .overwrite(overwrite)
            .from_table(path, table)
    }

    fn open(
        path: PathBuf,
        table: Table,
        include_header_line: bool,
        overwrite: bool,
    ) -> Result<Self> {
        if table.delimiter().is_empty() {
            return Err(TableError::EmptyDelimiter);
        }
        if !overwrite && path.exists() {
            return Err(TableError::AlreadyExists(path));
        }

        debug!(
            "Opening incremental writer on {} (header line: {}, overwrite: {})",
            path.display(),
            include_header_line,
            overwrite
        );

        Ok(Self {
            path,
            table: RefCell::new(table),
            include_header_line,
            overwrite,
            first_write: Cell::new(true),
        })
    }

    fn replay(&self) -> Result<()> {
        let row_count = self.table.borrow().row_count();
        if row_count == 0 {
            if self.overwrite {
                debug!("Emptying {}", self.path.display());
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(&self.path)?;
            }
            return Ok(());
        }
        for index in 0..row_count {
            let line = self.table.borrow().get_row(index as isize)?.to_string();
            self.persist(&line)?;
        }
        info!("{} rows written to {}", row_count, self.path.display());
        Ok(())
    }

    /// Adds a row to the table and appends it to the file.
    ///
    /// A row rejected by [`Table::insert_row`] leaves both the table and the
    /// file untouched. If the file write itself fails, the row stays in the
    /// table.
    pub fn write_row(&self, items: impl Into<RowInput>) -> Result<()> {
        let line = {
            let mut table = self.table.borrow_mut();
            table.insert_row(items)?;
            table.last_row()?.to_string()
        };
        self.persist(&line)
    }

    fn persist(&self, line: &str) -> Result<()> {
        if self.first_write.get() && self.include_header_line {
            let header_line = self.table.borrow().header_line();
            self.write_line(&header_line)?;
        }
        self.write_line(line)
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let truncate = self.first_write.get() && self.overwrite;

        let mut options = OpenOptions::new();
        options.create(true);
        if truncate {
            debug!("Truncating {}", self.path.display());
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }

        let mut file = options.open(&self.path)?;
        writeln!(file, "{line}")?;

        self.first_write.set(false);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> Vec<String> {
        self.table.borrow().headers().to_vec()
    }

    pub fn delimiter(&self) -> String {
        self.table.borrow().delimiter().to_string()
    }

    pub fn header_line(&self) -> String {
        self.table.borrow().header_line()
    }

    /// A copy of the table holding every row written so far.
    ///
    /// The copy does not follow later writes.
    pub fn table(&self) -> Table {
        self.table.borrow().clone()
    }

    pub fn into_table(self) -> Table {
        self.table.into_inner()
    }
}

impl ItemWriter<RowInput> for IncrementalWriter {
    fn write(&self, item: &RowInput) -> Result<()> {
        self.write_row(item.clone())
    }
}

impl fmt::Display for IncrementalWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table.borrow())
    }
}

/// A builder for configuring an [`IncrementalWriter`].
///
/// # Default Configuration
///
/// - Delimiter: comma (,)
/// - Header line: written
/// - Overwrite: enabled
#[derive(Debug, Clone)]
pub struct IncrementalWriterBuilder {
    delimiter: String,
    include_header_line: bool,
    overwrite: bool,
}

impl Default for IncrementalWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IncrementalWriterBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            include_header_line: true,
            overwrite: true,
        }
    }

    /// Sets the delimiter. Ignored by [`IncrementalWriterBuilder::from_table`],
    /// which keeps the delimiter of the table.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn include_header_line(mut self, yes: bool) -> Self {
        self.include_header_line = yes;
        self
    }

    /// Sets whether an existing file may be replaced.
    ///
    /// When disabled, building a writer for an existing path fails with
    /// [`TableError::AlreadyExists`].
    pub fn overwrite(mut self, yes: bool) -> Self {
        self.overwrite = yes;
        self
    }

    /// Creates a writer with an empty table.
    pub fn from_path<P, I, S>(self, path: P, headers: I) -> Result<IncrementalWriter>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = Table::with_delimiter(headers, self.delimiter);
        IncrementalWriter::open(
            path.as_ref().to_path_buf(),
            table,
            self.include_header_line,
            self.overwrite,
        )
    }

    /// Creates a writer owning `table` and writes all its rows.
    pub fn from_table<P: AsRef<Path>>(self, path: P, table: Table) -> Result<IncrementalWriter> {
        let writer = IncrementalWriter::open(
            path.as_ref().to_path_buf(),
            table,
            self.include_header_line,
            self.overwrite,
        )?;
        writer.replay()?;
        Ok(writer)
    }
}
