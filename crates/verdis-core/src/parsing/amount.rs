use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// Ordered amount patterns; the first pattern with a parseable capture
/// wins. Currency symbol first, then labelled totals, then a trailing
/// currency marker.
static AMOUNT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"£\s*([\d,]+\.?\d*)",
        r"(?i)gbp\s*([\d,]+\.?\d*)",
        r"(?i)total[:\s]+([\d,]+\.?\d*)",
        r"(?i)amount[:\s]+([\d,]+\.?\d*)",
        r"(?i)([\d,]+\.\d{2})\s*(?:gbp|£)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid amount pattern"))
    .collect()
});

/// Find a currency amount in raw invoice text.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    for re in AMOUNT_PATTERNS.iter() {
        if let Some(caps) = re.captures(text) {
            let raw = caps[1].replace(',', "");
            if let Ok(v) = raw.parse::<Decimal>() {
                return Some(v);
            }
        }
    }
    None
}
