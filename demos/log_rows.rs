use icsv::{
    core::{item::ItemWriter, table::Table},
    error::TableError,
    item::logger::LoggerWriter,
};

fn main() -> Result<(), TableError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let table = Table::from_reader("city,country\nBoston,US\nLyon,FR".as_bytes(), None, ",", true)?;

    let logger = LoggerWriter::default();
    for row in table.rows() {
        logger.write(&row.as_mapping())?;
    }

    Ok(())
}
