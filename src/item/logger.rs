use std::fmt::Debug;

use log::info;

use crate::{core::item::ItemWriter, error::Result};

/// An item writer that logs every item at `info` level instead of persisting it.
///
/// ```
/// use icsv::core::{item::ItemWriter, table::Table};
/// use icsv::item::logger::LoggerWriter;
///
/// let mut table = Table::new(["a", "b"]);
/// table.insert_row([1, 2])?;
///
/// let logger = LoggerWriter::default();
/// for row in table.rows() {
///     logger.write(&row)?;
/// }
/// # Ok::<(), icsv::TableError>(())
/// ```
#[derive(Default)]
pub struct LoggerWriter {}

impl<T> ItemWriter<T> for LoggerWriter
where
    T: Debug,
{
    fn write(&self, item: &T) -> Result<()> {
        info!("Record:{:?}", item);
        Ok(())
    }
}
