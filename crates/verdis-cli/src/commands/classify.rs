use std::path::PathBuf;
use verdis_core::error::VerdisError;

use crate::commands::load_factor_table;

pub fn run(
    description: &str,
    supplier: &str,
    factors: Option<PathBuf>,
) -> Result<(), VerdisError> {
    let table = load_factor_table(factors)?;
    let category = verdis_core::classify::classify(&table, description, supplier);

    match table.get(&category) {
        Some(entry) => println!(
            "{}  ({}, {} kg CO2e per {})",
            category, entry.scope, entry.emission_factor, entry.unit
        ),
        None => println!("{category}"),
    }

    Ok(())
}
