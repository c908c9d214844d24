use crate::factors::FactorTable;
use crate::model::CarbonResult;
use rust_decimal::Decimal;

/// Apply a category's emission factor to a resolved quantity.
///
/// Returns `None` only when the category has no entry in the factor table;
/// that is the single per-transaction failure mode of the pipeline.
/// Emissions are rounded to 2 decimal places with round-half-to-even, the
/// convention used everywhere a figure is rounded in this crate.
pub fn calculate(table: &FactorTable, category: &str, quantity: Decimal) -> Option<CarbonResult> {
    let entry = table.get(category)?;
    let emissions = (quantity * entry.emission_factor).round_dp(2);
    Some(CarbonResult {
        category: entry.category.clone(),
        subcategory: entry.subcategory.clone(),
        quantity,
        unit: entry.unit.clone(),
        emission_factor: entry.emission_factor,
        emissions_kg_co2e: emissions,
        scope: entry.scope.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::parse_table_str;
    use rust_decimal_macros::dec;

    fn make_table() -> FactorTable {
        parse_table_str(
            r#"{
                "name": "Test",
                "version": "1.0",
                "factors": [
                    { "category": "electricity", "scope": "Scope 2 - Indirect (energy)",
                      "subcategory": "Grid electricity", "unit": "kWh", "emission_factor": "0.207" },
                    { "category": "waste_general_kg", "scope": "Scope 3 - Value chain",
                      "subcategory": "General waste", "unit": "kg", "emission_factor": "0.5" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_known_category_multiplies_and_rounds() {
        let table = make_table();
        let r = calculate(&table, "electricity", dec!(12500)).unwrap();
        assert_eq!(r.emissions_kg_co2e, dec!(2587.50));
        assert_eq!(r.scope, "Scope 2 - Indirect (energy)");
        assert_eq!(r.subcategory, "Grid electricity");
        assert_eq!(r.quantity, dec!(12500));
        assert_eq!(r.emission_factor, dec!(0.207));
    }

    #[test]
    fn test_rounding_is_half_to_even() {
        let table = make_table();
        // 0.01 kg * 0.5 = 0.005 -> rounds to the even neighbour 0.00
        let r = calculate(&table, "waste_general_kg", dec!(0.01)).unwrap();
        assert_eq!(r.emissions_kg_co2e, dec!(0.00));
        // 0.03 kg * 0.5 = 0.015 -> 0.02
        let r = calculate(&table, "waste_general_kg", dec!(0.03)).unwrap();
        assert_eq!(r.emissions_kg_co2e, dec!(0.02));
    }

    #[test]
    fn test_unknown_category_returns_none() {
        let table = make_table();
        assert!(calculate(&table, "helicopter_hours", dec!(10)).is_none());
    }

    #[test]
    fn test_zero_quantity_is_zero_emissions() {
        let table = make_table();
        let r = calculate(&table, "electricity", Decimal::ZERO).unwrap();
        assert_eq!(r.emissions_kg_co2e, dec!(0.00));
    }
}
