#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # icsv

 In-memory tables of named columns and ordered rows, with plain delimited
 text parsing and an incremental writer that appends each new row to disk as
 soon as it is added.

 ## Core Concepts

- **Table:** owns the ordered headers, the delimiter and the rows. All mutation, parsing and querying goes through it.
- **RowView / ColumnView / Cell:** snapshots built on every query. They never follow later mutations of the table.
- **RowInput:** a row to insert, either positional (one value per header) or keyed (any subset of the headers).
- **IncrementalWriter:** owns a table and writes every row added to it straight to the target file.

 ## Features

| **Feature**   | **Description**                                               |
|---------------|---------------------------------------------------------------|
| logger        | Enables a logger `ItemWriter`, useful for debugging purposes  |
| full          | Enables all available features                                |

 ## Limits

 There is no quoting or escaping: a delimiter inside a value always splits it.
 The whole table lives in memory, and values read from files are always text.

 ## Getting Started

```rust
use icsv::{
    core::table::{RowInput, Table},
    error::TableError,
};

fn main() -> Result<(), TableError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("scores.csv");

    let mut table = Table::new(["name", "score"]);
    table.insert_row(["ada", "3"])?;
    table.insert_row(RowInput::keyed([("name", "grace")]))?;

    // Write the table, then keep appending through the writer
    let writer = table.write(&path, true, true)?;
    writer.write_row(["linus", "5"])?;

    let read = Table::from_file(&path, None, ",", true)?;
    assert_eq!(read.row_count(), 3);
    assert_eq!(read.get_row(1)?.to_string(), "grace,");
    assert_eq!(read.get_cell(-1, "score")?.value().to_string(), "5");

    Ok(())
}
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Core module: tables, values and views
pub mod core;

/// Error types
pub mod error;

#[doc(inline)]
pub use error::*;

/// Readers and writers for tables (delimited text, logger)
pub mod item;
