//! Delimited text support for tables.
//!
//! This module reads tables from and writes tables to plain delimited text:
//! one line per row, values joined by a delimiter string.
//!
//! # Module Architecture
//!
//! 1. **DelimitedItemReader**: splits a text source into lines and fields and
//!    yields one row record per line. [`Table::from_file`] builds on it.
//!
//! 2. **IncrementalWriter**: owns a table and appends each row to the target
//!    file as soon as it is added. [`Table::write`] builds on it.
//!
//! Both components are configured with a builder.
//!
//! # File Format
//!
//! - Lines are separated by `\n`
//! - The optional header line comes first and holds the headers joined by the delimiter
//! - Every other line holds one row, in header order, absent values rendered as empty text
//! - No quoting or escaping: values containing the delimiter do not survive a round trip
//!
//! # Examples
//!
//! ```
//! use icsv::core::table::Table;
//!
//! # fn main() -> Result<(), icsv::TableError> {
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("people.csv");
//!
//! let mut table = Table::new(["name", "age"]);
//! table.insert_row(["Alice", "28"])?;
//! table.insert_row(["Bob", "35"])?;
//!
//! let writer = table.write(&path, true, true)?;
//! writer.write_row(["Carol", "41"])?;
//!
//! let read = Table::from_file(&path, None, ",", true)?;
//! assert_eq!(read.headers(), ["name", "age"]);
//! assert_eq!(read.row_count(), 3);
//! assert_eq!(read.get_row(-1)?.to_string(), "Carol,41");
//! # Ok(())
//! # }
//! ```
//!
//! [`Table::from_file`]: crate::core::table::Table::from_file
//! [`Table::write`]: crate::core::table::Table::write

/// A module providing facilities for reading delimited records.
pub mod delimited_reader;

/// A module providing the incremental delimited writer.
pub mod incremental_writer;
