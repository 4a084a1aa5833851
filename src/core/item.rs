use crate::error::TableError;

/// Result of reading one item: `Ok(None)` once the source is exhausted.
pub type ItemReaderResult<R> = Result<Option<R>, TableError>;

pub trait ItemReader<R> {
    fn read(&self) -> ItemReaderResult<R>;
}

pub trait ItemWriter<W> {
    fn write(&self, item: &W) -> Result<(), TableError>;
    fn flush(&self) -> Result<(), TableError> {
        Ok(())
    }
}
