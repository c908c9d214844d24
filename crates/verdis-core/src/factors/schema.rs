use crate::model::Unit;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A factor table: emission factors plus the keyword index the classifier
/// scans. Both collections are ordered arrays, not maps: the file's order
/// is the priority order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorTableDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub factors: Vec<FactorEntryDef>,
    #[serde(default)]
    pub keywords: Vec<KeywordGroupDef>,
}

/// One emission factor entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorEntryDef {
    /// Unique category key (e.g. "electricity").
    pub category: String,
    /// Scope label, e.g. "Scope 2 - Indirect (energy)". Used verbatim for
    /// display and by substring match for scope bucketing.
    pub scope: String,
    /// Display label for the activity.
    pub subcategory: String,
    /// Unit the factor expects; selects the quantity-resolver branch.
    pub unit: Unit,
    /// kg CO2e per one unit (as a string for exact decimal).
    pub emission_factor: Decimal,
}

/// Keywords that select a category during classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordGroupDef {
    pub category: String,
    /// Lowercase substrings; any match against the lowercased transaction
    /// text selects the category.
    pub terms: Vec<String>,
}
