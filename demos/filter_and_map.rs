use icsv::{
    core::{table::Table, value::Value},
    error::TableError,
};

fn main() -> Result<(), TableError> {
    let mut table = Table::new(["one", "two", "three"]);
    table.insert_row([0, 0, 0])?;
    table.insert_row([1, 0, 0])?;
    table.insert_row([1, 1, 0])?;
    table.insert_row([1, 1, 1])?;

    for cell in table.filter(|_, _, value| *value == 1) {
        println!("row {} / {} = {}", cell.row(), cell.header(), cell.value());
    }

    let doubled = table
        .map(
            |_, _, value| match value.as_i64() {
                Some(int) => Value::from(int * 2),
                None => value.clone(),
            },
            false,
        )
        .into_copy();

    if let Some(doubled) = doubled {
        println!("{doubled}");
    }
    println!("{table}");

    Ok(())
}
