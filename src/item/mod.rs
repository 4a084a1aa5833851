/// This module provides the delimited text reader and the incremental writer.
pub mod delimited;

#[cfg(feature = "logger")]
/// This module provides a logger item writer, useful for debugging purposes.
pub mod logger;
