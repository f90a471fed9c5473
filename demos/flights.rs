//! A flights table through every table layout.
//!
//! Run with: cargo run --example flights

use shapejson::{
    from_str, to_string, to_string_pretty, to_string_with_options, EncodeOptions, Factor, RValue,
    Table, TableLayout, Vector,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let flights = Table::new(vec![
        ("year".to_string(), Vector::from(vec![2013, 2013, 2013, 2013])),
        (
            "carrier".to_string(),
            Vector::from(Factor::from_labels(&[Some("UA"), Some("UA"), Some("AA"), Some("B6")])),
        ),
        ("flight".to_string(), Vector::from(vec![1545, 1714, 1141, 725])),
        (
            "dep_delay".to_string(),
            Vector::from(vec![Some(2.0), Some(4.0), Some(2.0), None]),
        ),
        (
            "dest".to_string(),
            Vector::from(vec![Some("IAH"), Some("IAH"), Some("MIA"), None]),
        ),
    ])?;
    let value = RValue::from(flights);

    // Rows: one record per flight, missing cells left out
    println!("Rows:\n{}\n", to_string_pretty(&value)?);

    let columns = to_string_with_options(
        &value,
        EncodeOptions::pretty().with_table(TableLayout::Columns),
    )?;
    println!("Columns:\n{}\n", columns);

    let values = to_string_with_options(&value, EncodeOptions::new().with_table(TableLayout::Values))?;
    println!("Values:\n{}\n", values);

    // Decoding recovers a table; the factor comes back as text
    let json = to_string(&value)?;
    let back = from_str(&json)?;
    if let Some(table) = back.as_table() {
        println!("Decoded {} rows x {} columns", table.nrow(), table.ncol());
    }
    assert_eq!(to_string(&back)?, json);
    println!("✓ Round-trip successful");

    Ok(())
}
