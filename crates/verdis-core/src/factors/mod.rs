pub mod builtin;
pub mod defra_xlsx;
pub mod schema;

use crate::error::VerdisError;
use rust_decimal::Decimal;
use schema::{FactorEntryDef, FactorTableDef, KeywordGroupDef};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// A validated factor table with a category lookup index.
///
/// Constructed once at startup and passed by reference into the classifier,
/// quantity resolver and calculator; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct FactorTable {
    def: FactorTableDef,
    index: HashMap<String, usize>,
}

impl FactorTable {
    pub fn new(def: FactorTableDef) -> Result<FactorTable, VerdisError> {
        validate_table(&def)?;
        let index = def
            .factors
            .iter()
            .enumerate()
            .map(|(i, e)| (e.category.clone(), i))
            .collect();
        info!(
            name = %def.name,
            factors = def.factors.len(),
            keyword_groups = def.keywords.len(),
            "factor table loaded"
        );
        Ok(FactorTable { def, index })
    }

    pub fn get(&self, category: &str) -> Option<&FactorEntryDef> {
        self.index.get(category).map(|&i| &self.def.factors[i])
    }

    /// Factor entries in table order.
    pub fn entries(&self) -> &[FactorEntryDef] {
        &self.def.factors
    }

    /// Keyword groups in table order, which is the classifier's priority order.
    pub fn keyword_groups(&self) -> &[KeywordGroupDef] {
        &self.def.keywords
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn version(&self) -> &str {
        &self.def.version
    }

    pub fn definition(&self) -> &FactorTableDef {
        &self.def
    }
}

/// Load a factor table from a JSON file.
pub fn load_table(path: &Path) -> Result<FactorTable, VerdisError> {
    let content = std::fs::read_to_string(path).map_err(|e| VerdisError::FactorTableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_table(&content, path)
}

/// Parse a factor table from a JSON string.
pub fn parse_table(json: &str, source: &Path) -> Result<FactorTable, VerdisError> {
    let def: FactorTableDef =
        serde_json::from_str(json).map_err(|e| VerdisError::FactorTableLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    FactorTable::new(def)
}

/// Parse a factor table from a JSON string (no file path context).
pub fn parse_table_str(json: &str) -> Result<FactorTable, VerdisError> {
    let def: FactorTableDef = serde_json::from_str(json).map_err(VerdisError::Json)?;
    FactorTable::new(def)
}

/// Validate that a factor table is well-formed. Violations are fatal at
/// load time; per-transaction processing never revalidates.
fn validate_table(def: &FactorTableDef) -> Result<(), VerdisError> {
    if def.factors.is_empty() {
        return Err(VerdisError::FactorTableInvalid(
            "factors must not be empty".into(),
        ));
    }

    let mut seen = HashMap::new();
    for entry in &def.factors {
        if entry.category.is_empty() {
            return Err(VerdisError::FactorTableInvalid(
                "category key must not be empty".into(),
            ));
        }
        if seen.insert(entry.category.as_str(), ()).is_some() {
            return Err(VerdisError::FactorTableInvalid(format!(
                "duplicate category '{}'",
                entry.category
            )));
        }
        if entry.emission_factor < Decimal::ZERO {
            return Err(VerdisError::FactorTableInvalid(format!(
                "category '{}' has negative emission factor {}",
                entry.category, entry.emission_factor
            )));
        }
    }

    for group in &def.keywords {
        if !seen.contains_key(group.category.as_str()) {
            return Err(VerdisError::FactorTableInvalid(format!(
                "keyword group references unknown category '{}'",
                group.category
            )));
        }
        if group.terms.is_empty() {
            return Err(VerdisError::FactorTableInvalid(format!(
                "keyword group for '{}' has no terms",
                group.category
            )));
        }
        for term in &group.terms {
            if term.is_empty() {
                return Err(VerdisError::FactorTableInvalid(format!(
                    "keyword group for '{}' contains an empty term",
                    group.category
                )));
            }
            if *term != term.to_lowercase() {
                return Err(VerdisError::FactorTableInvalid(format!(
                    "keyword term '{}' for '{}' must be lowercase",
                    term, group.category
                )));
            }
        }
    }

    Ok(())
}
