use std::{env::temp_dir, fs};

use icsv::{
    core::table::{RowInput, Table},
    error::TableError,
    item::delimited::incremental_writer::IncrementalWriterBuilder,
};

fn main() -> Result<(), TableError> {
    env_logger::init();

    let path = temp_dir().join("icsv_readings.csv");

    let writer = IncrementalWriterBuilder::new()
        .delimiter(";")
        .from_path(&path, ["sensor", "reading", "unit"])?;

    // Each row reaches the disk as soon as it is written
    writer.write_row(["s1", "21.5", "C"])?;
    writer.write_row(RowInput::keyed([("sensor", "s2"), ("reading", "19")]))?;
    writer.write_row(["s3", "70.1", "F"])?;

    println!("{}", fs::read_to_string(&path)?);

    let table = Table::from_file(&path, None, ";", true)?;
    println!("{} rows read back from {}", table.row_count(), path.display());

    fs::remove_file(&path).ok();
    Ok(())
}
