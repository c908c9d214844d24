use crate::error::VerdisError;
use crate::factors::schema::FactorTableDef;
use crate::factors::FactorTable;

const DEFRA_2024_JSON: &str = include_str!("../../../../factors/defra-ghg-2024.json");

/// Available predefined factor tables.
pub const PRESETS: &[&str] = &["defra-2024"];

/// Preset used when the caller does not supply a custom table.
pub const DEFAULT_PRESET: &str = "defra-2024";

/// Load a predefined factor table by name.
pub fn load_preset(name: &str) -> Result<FactorTable, VerdisError> {
    match name {
        "defra-2024" => {
            let def: FactorTableDef = serde_json::from_str(DEFRA_2024_JSON)?;
            FactorTable::new(def)
        }
        _ => Err(VerdisError::FactorTableInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_load_defra_preset() {
        let table = load_preset("defra-2024").unwrap();
        let entry = table.get("electricity").unwrap();
        assert_eq!(entry.emission_factor, dec!(0.207));
        assert_eq!(entry.scope, "Scope 2 - Indirect (energy)");
        assert!(!table.keyword_groups().is_empty());
    }

    #[test]
    fn test_preset_covers_fallback_chain() {
        // Every category the classifier's fallback chain can emit must
        // resolve to a factor entry in the shipped table.
        let table = load_preset("defra-2024").unwrap();
        for category in [
            "electricity",
            "natural_gas",
            "diesel_litres",
            "train_national_km",
            "flight_short_haul_km",
            "hotel_night",
            "freight_road_kg_km",
            "paper_tonne",
            "office_equipment_gbp",
            "water_m3",
            "waste_general_kg",
            "generic_materials_gbp",
            "generic_services_gbp",
        ] {
            assert!(table.get(category).is_some(), "missing {category}");
        }
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }
}
