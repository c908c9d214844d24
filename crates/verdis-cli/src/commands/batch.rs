use std::path::{Path, PathBuf};
use verdis_core::error::VerdisError;
use verdis_core::model::TransactionInput;

use crate::commands::load_factor_table;
use crate::output;

pub fn run(
    input_file: PathBuf,
    factors: Option<PathBuf>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), VerdisError> {
    let table = load_factor_table(factors)?;
    let inputs = read_transactions(&input_file)?;
    let result = verdis_core::process_batch(&table, &inputs);

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&result)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Scored {} transaction(s) ({} calculated), written to {}",
                result.transactions.len(),
                result.scorecard.transaction_count,
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&result)?,
            "html" => println!("{}", output::html::render_scorecard(&result.scorecard)),
            _ => output::table::print_batch(&result),
        },
    }

    Ok(())
}

/// Read transactions from a JSON array or (by extension) a CSV file.
fn read_transactions(path: &Path) -> Result<Vec<TransactionInput>, VerdisError> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        let mut reader =
            csv::Reader::from_path(path).map_err(|e| VerdisError::BatchImport(e.to_string()))?;
        let mut rows = Vec::new();
        for record in reader.deserialize::<TransactionInput>() {
            rows.push(record.map_err(|e| VerdisError::BatchImport(e.to_string()))?);
        }
        Ok(rows)
    } else {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
