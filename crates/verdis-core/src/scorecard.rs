use crate::model::{CarbonResult, TransactionOutcome};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reporting standard the scorecard is aligned with.
pub const STANDARDS: &str = "UK Sustainability Reporting Standards (UK SRS) 2026";

/// Cap on the result sample embedded in a scorecard.
const SAMPLE_CAP: usize = 50;

const KG_PER_TONNE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Summed emissions for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub emissions_kg_co2e: Decimal,
}

/// Aggregated, report-ready emissions summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scorecard {
    pub standards: String,
    pub scope1_kg_co2e: Decimal,
    pub scope2_kg_co2e: Decimal,
    pub scope3_kg_co2e: Decimal,
    pub total_kg_co2e: Decimal,
    pub total_tonnes_co2e: Decimal,
    /// Number of results that contributed (i.e. that calculated).
    pub transaction_count: usize,
    /// Per-category sums, sorted descending; ties keep encounter order.
    pub breakdown_by_category: Vec<CategoryTotal>,
    /// First 50 contributing results, in input order.
    pub transactions: Vec<CarbonResult>,
}

/// Result of a batch run: every input's outcome plus the scorecard built
/// over the successfully calculated subset.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub transactions: Vec<TransactionOutcome>,
    pub scorecard: Scorecard,
}

/// Fold calculated results into a scorecard.
///
/// Pure and total: empty input yields all-zero totals, an empty breakdown
/// and an empty sample. Scope bucketing is by substring on the result's
/// scope label, checking "Scope 1" before "Scope 2" and defaulting to
/// Scope 3; first matching label wins, the same priority convention the
/// classifier uses. A label containing both substrings would bucket to
/// Scope 1 by that order; no shipped label does.
pub fn build_scorecard(results: &[CarbonResult]) -> Scorecard {
    let mut scope1 = Decimal::ZERO;
    let mut scope2 = Decimal::ZERO;
    let mut scope3 = Decimal::ZERO;
    let mut breakdown: Vec<CategoryTotal> = Vec::new();

    for r in results {
        if r.scope.contains("Scope 1") {
            scope1 += r.emissions_kg_co2e;
        } else if r.scope.contains("Scope 2") {
            scope2 += r.emissions_kg_co2e;
        } else {
            scope3 += r.emissions_kg_co2e;
        }

        let key = if r.category.is_empty() {
            "Uncategorized"
        } else {
            r.category.as_str()
        };
        match breakdown.iter_mut().find(|c| c.category == key) {
            Some(c) => c.emissions_kg_co2e += r.emissions_kg_co2e,
            None => breakdown.push(CategoryTotal {
                category: key.to_string(),
                emissions_kg_co2e: r.emissions_kg_co2e,
            }),
        }
    }

    for c in &mut breakdown {
        c.emissions_kg_co2e = c.emissions_kg_co2e.round_dp(2);
    }
    // sort_by is stable, so equal sums keep encounter order
    breakdown.sort_by(|a, b| b.emissions_kg_co2e.cmp(&a.emissions_kg_co2e));

    let total = scope1 + scope2 + scope3;
    Scorecard {
        standards: STANDARDS.to_string(),
        scope1_kg_co2e: scope1.round_dp(2),
        scope2_kg_co2e: scope2.round_dp(2),
        scope3_kg_co2e: scope3.round_dp(2),
        total_kg_co2e: total.round_dp(2),
        total_tonnes_co2e: (total / KG_PER_TONNE).round_dp(2),
        transaction_count: results.len(),
        breakdown_by_category: breakdown,
        transactions: results.iter().take(SAMPLE_CAP).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Unit;
    use rust_decimal_macros::dec;

    fn result(category: &str, scope: &str, emissions: Decimal) -> CarbonResult {
        CarbonResult {
            category: category.to_string(),
            subcategory: category.to_string(),
            quantity: Decimal::ONE,
            unit: Unit::Gbp,
            emission_factor: emissions,
            emissions_kg_co2e: emissions,
            scope: scope.to_string(),
        }
    }

    #[test]
    fn test_empty_input_yields_zero_scorecard() {
        let s = build_scorecard(&[]);
        assert_eq!(s.scope1_kg_co2e, Decimal::ZERO);
        assert_eq!(s.scope2_kg_co2e, Decimal::ZERO);
        assert_eq!(s.scope3_kg_co2e, Decimal::ZERO);
        assert_eq!(s.total_kg_co2e, Decimal::ZERO);
        assert_eq!(s.transaction_count, 0);
        assert!(s.breakdown_by_category.is_empty());
        assert!(s.transactions.is_empty());
    }

    #[test]
    fn test_scope_bucketing_by_substring() {
        let s = build_scorecard(&[
            result("natural_gas", "Scope 1 - Direct emissions", dec!(10.00)),
            result("electricity", "Scope 2 - Indirect (energy)", dec!(20.00)),
            result("hotel_night", "Scope 3 - Value chain", dec!(30.00)),
            // Unrecognized label defaults to Scope 3
            result("misc", "Out of scopes", dec!(5.00)),
        ]);
        assert_eq!(s.scope1_kg_co2e, dec!(10.00));
        assert_eq!(s.scope2_kg_co2e, dec!(20.00));
        assert_eq!(s.scope3_kg_co2e, dec!(35.00));
    }

    #[test]
    fn test_total_is_exact_sum_of_scopes() {
        let results: Vec<CarbonResult> = (0..7)
            .map(|i| {
                let scope = match i % 3 {
                    0 => "Scope 1 - Direct emissions",
                    1 => "Scope 2 - Indirect (energy)",
                    _ => "Scope 3 - Value chain",
                };
                result("cat", scope, dec!(0.01) * Decimal::from(i + 1))
            })
            .collect();
        let s = build_scorecard(&results);
        assert_eq!(
            s.total_kg_co2e,
            s.scope1_kg_co2e + s.scope2_kg_co2e + s.scope3_kg_co2e
        );
        assert_eq!(s.transaction_count, 7);
    }

    #[test]
    fn test_breakdown_sorted_descending() {
        let s = build_scorecard(&[
            result("small", "Scope 3 - Value chain", dec!(1.00)),
            result("large", "Scope 3 - Value chain", dec!(100.00)),
            result("medium", "Scope 3 - Value chain", dec!(10.00)),
            result("large", "Scope 3 - Value chain", dec!(50.00)),
        ]);
        let categories: Vec<&str> = s
            .breakdown_by_category
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(categories, vec!["large", "medium", "small"]);
        assert_eq!(s.breakdown_by_category[0].emissions_kg_co2e, dec!(150.00));
    }

    #[test]
    fn test_breakdown_tie_keeps_encounter_order() {
        let s = build_scorecard(&[
            result("first_seen", "Scope 3 - Value chain", dec!(5.00)),
            result("second_seen", "Scope 3 - Value chain", dec!(5.00)),
        ]);
        assert_eq!(s.breakdown_by_category[0].category, "first_seen");
        assert_eq!(s.breakdown_by_category[1].category, "second_seen");
    }

    #[test]
    fn test_empty_category_buckets_as_uncategorized() {
        let s = build_scorecard(&[result("", "Scope 3 - Value chain", dec!(3.00))]);
        assert_eq!(s.breakdown_by_category[0].category, "Uncategorized");
    }

    #[test]
    fn test_sample_capped_to_first_fifty() {
        let results: Vec<CarbonResult> = (0..60)
            .map(|i| {
                result(
                    &format!("cat_{i}"),
                    "Scope 3 - Value chain",
                    Decimal::from(i),
                )
            })
            .collect();
        let s = build_scorecard(&results);
        assert_eq!(s.transactions.len(), 50);
        // First 50 in input order, not the highest-emission ones.
        assert_eq!(s.transactions[0].category, "cat_0");
        assert_eq!(s.transactions[49].category, "cat_49");
        assert_eq!(s.transaction_count, 60);
    }

    #[test]
    fn test_tonnes_conversion() {
        let s = build_scorecard(&[result("big", "Scope 1 - Direct emissions", dec!(2587.50))]);
        assert_eq!(s.total_tonnes_co2e, dec!(2.59));
    }
}
