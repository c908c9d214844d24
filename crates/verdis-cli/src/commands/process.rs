use std::path::PathBuf;
use verdis_core::error::VerdisError;
use verdis_core::extraction::pdftotext::PdftotextExtractor;
use verdis_core::extraction::tesseract::TesseractExtractor;

use crate::commands::load_factor_table;
use crate::output;

pub fn run(
    input_file: PathBuf,
    factors: Option<PathBuf>,
    output_format: &str,
) -> Result<(), VerdisError> {
    let table = load_factor_table(factors)?;

    let ext = input_file
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let result = match ext.as_deref() {
        // Pre-extracted text skips the extraction backends entirely
        Some("txt") => {
            let text = std::fs::read_to_string(&input_file)?;
            verdis_core::process_text(&text, &table)
        }
        Some("pdf") => {
            let bytes = std::fs::read(&input_file)?;
            verdis_core::process_document(&bytes, &PdftotextExtractor::new(), &table)
        }
        // Everything else is treated as an image and OCR'd
        _ => {
            let bytes = std::fs::read(&input_file)?;
            verdis_core::process_document(&bytes, &TesseractExtractor::new(), &table)
        }
    };

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_document(&result),
    }

    Ok(())
}
