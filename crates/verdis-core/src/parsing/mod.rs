pub mod amount;
pub mod date;

use crate::classify;
use crate::factors::FactorTable;
use crate::model::ExtractedFields;
use regex::Regex;
use std::sync::LazyLock;

/// Suppliers recognized in invoice text, lowercase. First hit wins.
const KNOWN_SUPPLIERS: &[&str] = &[
    "edf energy",
    "british gas",
    "octopus energy",
    "shell energy",
    "bp fuel",
    "shell fuel",
    "esso",
    "national rail",
    "tfl",
    "british airways",
    "easyjet",
    "ryanair",
    "premier inn",
    "travelodge",
    "dhl",
    "dpd",
    "ups",
    "fedex",
    "staples",
    "viking direct",
    "dell",
    "hp",
    "thames water",
    "biffa",
];

/// Lines of pure digits/currency punctuation are figures, not descriptions.
static FIGURE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d£\s.,\-/]+$").expect("invalid figure-line pattern"));

/// Recover structured fields from raw (possibly OCR-noisy) invoice text.
///
/// Every field is best-effort; nothing here fails. The category is the
/// classification of the whole text.
pub fn extract_fields(table: &FactorTable, text: &str) -> ExtractedFields {
    let lower = text.to_lowercase();
    ExtractedFields {
        supplier: detect_supplier(&lower),
        amount: amount::parse_amount(text),
        date: date::parse_date(text),
        description: extract_description(text),
        category: classify::classify(table, text, ""),
    }
}

fn detect_supplier(lower_text: &str) -> Option<String> {
    KNOWN_SUPPLIERS
        .iter()
        .find(|s| lower_text.contains(*s))
        .map(|s| title_case(s))
}

/// First non-empty line that is not purely figures, truncated to 200 chars;
/// falls back to the start of the text.
fn extract_description(text: &str) -> String {
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || FIGURE_LINE.is_match(trimmed) {
            continue;
        }
        return trimmed.chars().take(200).collect();
    }
    text.chars().take(200).collect()
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::builtin::{load_preset, DEFAULT_PRESET};
    use rust_decimal_macros::dec;

    const INVOICE: &str = "\
INVOICE #INV-00123
British Gas
Business Electricity Supply
Period: 01/01/2024 - 31/01/2024

Consumption: 12,500 kWh
Amount: £2,812.50
Total: £3,375.00
";

    #[test]
    fn test_extract_fields_from_invoice() {
        let table = load_preset(DEFAULT_PRESET).unwrap();
        let fields = extract_fields(&table, INVOICE);
        assert_eq!(fields.supplier.as_deref(), Some("British Gas"));
        assert_eq!(fields.amount, Some(dec!(2812.50)));
        assert_eq!(fields.date.as_deref(), Some("2024-01-01"));
        assert_eq!(fields.description, "INVOICE #INV-00123");
        assert_eq!(fields.category, "electricity");
    }

    #[test]
    fn test_extract_fields_empty_text() {
        let table = load_preset(DEFAULT_PRESET).unwrap();
        let fields = extract_fields(&table, "");
        assert!(fields.supplier.is_none());
        assert!(fields.amount.is_none());
        assert!(fields.date.is_none());
        assert_eq!(fields.description, "");
        // Classification is total even on empty text.
        assert_eq!(fields.category, classify::FALLBACK_CATEGORY);
    }

    #[test]
    fn test_description_skips_figure_lines() {
        assert_eq!(
            extract_description("\n  £1,234.56  \n12/01/2024\nDiesel for company vehicles\n"),
            "Diesel for company vehicles"
        );
    }

    #[test]
    fn test_description_truncates_to_200_chars() {
        let long = "x".repeat(300);
        assert_eq!(extract_description(&long).chars().count(), 200);
    }

    #[test]
    fn test_supplier_title_cased() {
        assert_eq!(
            detect_supplier("payment to edf energy ref 991").as_deref(),
            Some("Edf Energy")
        );
        assert!(detect_supplier("unknown vendor ltd").is_none());
    }
}
