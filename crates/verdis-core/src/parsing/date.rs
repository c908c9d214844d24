use regex::Regex;
use std::sync::LazyLock;

static DAY_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})[/\-](\d{1,2})[/\-](\d{4})").expect("invalid date pattern")
});

static YEAR_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})[/\-](\d{1,2})[/\-](\d{1,2})").expect("invalid date pattern")
});

/// Find a date in raw invoice text and normalize it to YYYY-MM-DD.
///
/// UK invoices are day-first, so DD/MM/YYYY is tried before YYYY-MM-DD.
pub fn parse_date(text: &str) -> Option<String> {
    if let Some(c) = DAY_FIRST.captures(text) {
        return Some(format!("{}-{:0>2}-{:0>2}", &c[3], &c[2], &c[1]));
    }
    if let Some(c) = YEAR_FIRST.captures(text) {
        return Some(format!("{}-{:0>2}-{:0>2}", &c[1], &c[2], &c[3]));
    }
    None
}
