use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical unit an emission factor is expressed in.
///
/// The eight recognized units each select one branch of the quantity
/// resolver; anything else is carried as `Other` and handled by the
/// currency fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    KilowattHour,
    Litre,
    Kilometre,
    Night,
    TonneKilometre,
    Kilogram,
    CubicMetre,
    Gbp,
    Other(String),
}

impl Unit {
    pub fn parse(s: &str) -> Unit {
        match s.trim() {
            "kWh" => Unit::KilowattHour,
            "litre" => Unit::Litre,
            "km" => Unit::Kilometre,
            "night" => Unit::Night,
            "tonne.km" => Unit::TonneKilometre,
            "kg" => Unit::Kilogram,
            "m3" => Unit::CubicMetre,
            "GBP" => Unit::Gbp,
            other => Unit::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::KilowattHour => write!(f, "kWh"),
            Unit::Litre => write!(f, "litre"),
            Unit::Kilometre => write!(f, "km"),
            Unit::Night => write!(f, "night"),
            Unit::TonneKilometre => write!(f, "tonne.km"),
            Unit::Kilogram => write!(f, "kg"),
            Unit::CubicMetre => write!(f, "m3"),
            Unit::Gbp => write!(f, "GBP"),
            Unit::Other(s) => write!(f, "{s}"),
        }
    }
}

impl Serialize for Unit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Unit::parse(&s))
    }
}

/// A single invoice/transaction record to be scored.
///
/// Deserializable from a JSON array element or a CSV row. Every field is
/// defaulted so a sparse record still processes; a missing amount scores
/// as zero rather than failing the batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub supplier: String,
    pub description: String,
    pub amount_gbp: Decimal,
    pub quantity: Option<Decimal>,
    pub unit: Option<String>,
    /// Explicit category override; empty or absent means "classify me".
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Computed emissions for one transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonResult {
    pub category: String,
    pub subcategory: String,
    /// Physical quantity the factor was applied to, in `unit`.
    pub quantity: Decimal,
    pub unit: Unit,
    /// kg CO2e per one unit.
    pub emission_factor: Decimal,
    /// quantity x emission_factor, rounded to 2 decimal places
    /// (round-half-to-even, the convention used pipeline-wide).
    pub emissions_kg_co2e: Decimal,
    /// Scope label copied verbatim from the factor entry.
    pub scope: String,
}

/// One slot of a batch run: the input echoed with its resolved category.
///
/// `carbon_result` is `None` when the category has no factor entry; the
/// slot still appears in the output so callers see every record.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionOutcome {
    pub input: TransactionInput,
    pub category: String,
    pub carbon_result: Option<CarbonResult>,
}

/// Structured fields recovered from raw document text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub supplier: Option<String>,
    pub amount: Option<Decimal>,
    /// Normalized to YYYY-MM-DD when a date was found.
    pub date: Option<String>,
    pub description: String,
    pub category: String,
}

/// Result of the single-document flow.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResult {
    pub extracted: ExtractedFields,
    pub carbon_result: Option<CarbonResult>,
    /// First 500 characters of the extracted text.
    pub text_preview: String,
}
