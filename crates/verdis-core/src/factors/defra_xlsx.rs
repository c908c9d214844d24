use std::io::Cursor;

use calamine::{Reader, Xlsx};
use rust_decimal::Decimal;

use crate::error::VerdisError;
use crate::factors::schema::{FactorEntryDef, FactorTableDef};
use crate::model::Unit;

/// Convert the official GOV.UK "flat format" conversion-factor workbook
/// into a draft factor table.
///
/// Category keys are slugified from the Level columns and the output has
/// no keyword index, so the result is a starting point for manual curation
/// rather than a drop-in table.
pub fn convert_defra_flat(bytes: &[u8], year: &str) -> Result<FactorTableDef, VerdisError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| VerdisError::FactorTableInvalid(format!("failed to open xlsx: {e}")))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| VerdisError::FactorTableInvalid("workbook has no sheets".into()))?;
    let sheet = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| VerdisError::FactorTableInvalid(format!("sheet '{sheet_name}': {e}")))?;

    let rows: Vec<&[calamine::Data]> = sheet.rows().collect();
    let header = find_header(&rows).ok_or_else(|| {
        VerdisError::FactorTableInvalid(
            "not a DEFRA flat-format file (no header row with 'Scope' and 'UOM')".into(),
        )
    })?;

    let mut factors: Vec<FactorEntryDef> = Vec::new();
    for row in rows.iter().skip(header.row_index + 1) {
        let scope_cell = match cell_as_string(row.get(header.scope_col)) {
            Some(s) if s.starts_with("Scope") => s,
            _ => continue,
        };

        // The flat file carries one row per gas; keep only the CO2e totals.
        if let Some(ghg_col) = header.ghg_col {
            match cell_as_string(row.get(ghg_col)) {
                Some(g) if g.eq_ignore_ascii_case("kg CO2e") => {}
                _ => continue,
            }
        }

        let levels: Vec<String> = header
            .level_cols
            .iter()
            .filter_map(|&c| cell_as_string(row.get(c)))
            .collect();
        if levels.is_empty() {
            continue;
        }

        let uom = match cell_as_string(row.get(header.uom_col)) {
            Some(u) => u,
            None => continue,
        };
        let factor = match cell_as_f64(row.get(header.factor_col)) {
            Some(f) if f >= 0.0 => f64_to_decimal(f),
            _ => continue,
        };

        let category = slugify(&levels.join(" "));
        if factors.iter().any(|e| e.category == category) {
            continue; // first occurrence wins
        }

        factors.push(FactorEntryDef {
            category,
            scope: map_scope_label(&scope_cell).to_string(),
            subcategory: levels.join(" / "),
            unit: map_uom(&uom),
            emission_factor: factor,
        });
    }

    if factors.is_empty() {
        return Err(VerdisError::FactorTableInvalid(
            "no kg CO2e factor rows found in workbook".into(),
        ));
    }

    Ok(FactorTableDef {
        name: format!("DEFRA GHG Conversion Factors {year} (converted)"),
        description: Some("Draft table converted from the GOV.UK flat file; review keys and add keywords before use".into()),
        version: format!("{year}-draft"),
        factors,
        keywords: Vec::new(),
    })
}

struct FlatHeader {
    row_index: usize,
    scope_col: usize,
    level_cols: Vec<usize>,
    uom_col: usize,
    ghg_col: Option<usize>,
    factor_col: usize,
}

/// Locate the header row: the flat format keeps "Scope", the Level columns,
/// "UOM" and the conversion-factor column on one line near the top.
fn find_header(rows: &[&[calamine::Data]]) -> Option<FlatHeader> {
    for (row_index, row) in rows.iter().enumerate().take(20) {
        let cells: Vec<Option<String>> = row.iter().map(|c| cell_as_string(Some(c))).collect();

        let col_of = |name: &str| -> Option<usize> {
            cells
                .iter()
                .position(|c| c.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(name)))
        };

        let scope_col = match col_of("Scope") {
            Some(c) => c,
            None => continue,
        };
        let uom_col = match col_of("UOM") {
            Some(c) => c,
            None => continue,
        };

        let level_cols: Vec<usize> = (1..=4)
            .filter_map(|n| col_of(&format!("Level {n}")))
            .collect();

        let factor_col = match cells.iter().position(|c| {
            c.as_deref()
                .is_some_and(|s| s.to_lowercase().contains("conversion factor"))
        }) {
            Some(c) => c,
            None => continue,
        };

        return Some(FlatHeader {
            row_index,
            scope_col,
            level_cols,
            uom_col,
            ghg_col: col_of("GHG/Unit"),
            factor_col,
        });
    }
    None
}

fn map_scope_label(scope_cell: &str) -> &'static str {
    if scope_cell.contains("Scope 1") {
        "Scope 1 - Direct emissions"
    } else if scope_cell.contains("Scope 2") {
        "Scope 2 - Indirect (energy)"
    } else {
        "Scope 3 - Value chain"
    }
}

fn map_uom(uom: &str) -> Unit {
    let lower = uom.trim().to_lowercase();
    if lower.contains("kwh") {
        Unit::KilowattHour
    } else if lower.contains("litre") {
        Unit::Litre
    } else if lower.contains("tonne.km") {
        Unit::TonneKilometre
    } else if lower.contains("km") {
        Unit::Kilometre
    } else if lower.contains("night") || lower.contains("room") {
        Unit::Night
    } else if lower == "kg" {
        Unit::Kilogram
    } else if lower == "m3" || lower.contains("cubic metre") {
        Unit::CubicMetre
    } else if lower.contains("gbp") {
        Unit::Gbp
    } else {
        Unit::Other(uom.trim().to_string())
    }
}

/// Slugify a level path into a category key: lowercase, alphanumerics kept,
/// everything else collapsed to single underscores.
fn slugify(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_underscore = true; // start true to skip leading underscores
    for c in s.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            result.push('_');
            prev_underscore = true;
        }
    }
    if result.ends_with('_') {
        result.pop();
    }
    result
}

fn cell_as_string(cell: Option<&calamine::Data>) -> Option<String> {
    match cell? {
        calamine::Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        calamine::Data::Float(f) => Some(f.to_string()),
        calamine::Data::Int(i) => Some(i.to_string()),
        calamine::Data::Empty => None,
        other => Some(format!("{other}")),
    }
}

fn cell_as_f64(cell: Option<&calamine::Data>) -> Option<f64> {
    match cell? {
        calamine::Data::Float(f) => Some(*f),
        calamine::Data::Int(i) => Some(*i as f64),
        calamine::Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Convert f64 to Decimal via string round-trip to avoid floating-point
/// artifacts (e.g. 0.207_f64 becoming 0.20699999...).
fn f64_to_decimal(f: f64) -> Decimal {
    let s = format!("{f}");
    s.parse::<Decimal>()
        .unwrap_or_else(|_| Decimal::try_from(f).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn slugify_level_paths() {
        assert_eq!(slugify("Electricity generated"), "electricity_generated");
        assert_eq!(slugify("WTT- UK electricity (T&D)"), "wtt_uk_electricity_t_d");
        assert_eq!(slugify("  Vans "), "vans");
    }

    #[test]
    fn scope_labels_bucket_by_substring() {
        assert_eq!(map_scope_label("Scope 1"), "Scope 1 - Direct emissions");
        assert_eq!(map_scope_label("Scope 2"), "Scope 2 - Indirect (energy)");
        assert_eq!(map_scope_label("Scope 3"), "Scope 3 - Value chain");
        assert_eq!(map_scope_label("Outside of scopes"), "Scope 3 - Value chain");
    }

    #[test]
    fn uom_maps_to_resolver_units() {
        assert_eq!(map_uom("kWh"), Unit::KilowattHour);
        assert_eq!(map_uom("litres"), Unit::Litre);
        assert_eq!(map_uom("tonne.km"), Unit::TonneKilometre);
        assert_eq!(map_uom("passenger.km"), Unit::Kilometre);
        assert_eq!(map_uom("Room per night"), Unit::Night);
        assert_eq!(map_uom("tonnes"), Unit::Other("tonnes".into()));
    }

    #[test]
    fn f64_to_decimal_preserves_precision() {
        assert_eq!(f64_to_decimal(0.207), dec!(0.207));
        assert_eq!(f64_to_decimal(10.4), dec!(10.4));
        assert_eq!(f64_to_decimal(68.0), dec!(68));
    }
}
