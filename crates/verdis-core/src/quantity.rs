use crate::model::Unit;
use rust_decimal::Decimal;

// Rough currency-to-quantity conversion rates, used when a transaction
// carries an amount but no usable physical quantity. The literal values
// and the branch order in `resolve_quantity` are contract: downstream
// figures are only reproducible if both stay fixed.
const KWH_PER_GBP: Decimal = Decimal::from_parts(15, 0, 0, false, 2); // 0.15
const GBP_PER_LITRE: Decimal = Decimal::from_parts(15, 0, 0, false, 1); // 1.5
const KM_PER_GBP: Decimal = Decimal::from_parts(15, 0, 0, false, 2); // 0.15
const TONNE_KM_PER_GBP: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01
const KG_PER_GBP: Decimal = Decimal::from_parts(5, 0, 0, false, 1); // 0.5
const M3_PER_GBP: Decimal = Decimal::from_parts(5, 0, 0, false, 1); // 0.5

/// Derive the physical quantity to multiply by an emission factor.
///
/// Total and deterministic: always produces a number, falling back to the
/// raw currency amount when nothing better applies. An explicit quantity
/// stated in the exact unit the factor expects wins outright; otherwise
/// the branch for the required unit applies, using the explicit quantity
/// when present and a rough currency estimate when not.
pub fn resolve_quantity(
    required: &Unit,
    quantity: Option<Decimal>,
    unit: Option<&str>,
    amount_gbp: Decimal,
    supplier: &str,
    description: &str,
) -> Decimal {
    if let (Some(q), Some(u)) = (quantity, unit) {
        if Unit::parse(u) == *required {
            return q;
        }
    }

    let text = format!("{description}{supplier}").to_lowercase();

    match required {
        Unit::Gbp => amount_gbp,
        Unit::KilowattHour if text.contains("electric") => {
            quantity.unwrap_or(amount_gbp * KWH_PER_GBP)
        }
        Unit::Litre => quantity.unwrap_or(amount_gbp / GBP_PER_LITRE),
        Unit::Kilometre => quantity.unwrap_or(amount_gbp * KM_PER_GBP),
        Unit::Night => quantity.unwrap_or(Decimal::ONE),
        Unit::TonneKilometre => quantity.unwrap_or(amount_gbp * TONNE_KM_PER_GBP),
        Unit::Kilogram => quantity.unwrap_or(amount_gbp * KG_PER_GBP),
        Unit::CubicMetre => quantity.unwrap_or(amount_gbp * M3_PER_GBP),
        // kWh without "electric" in the text, and any unrecognized unit:
        // fall back to the raw currency amount.
        _ => amount_gbp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_explicit_quantity_in_required_unit_wins() {
        let q = resolve_quantity(
            &Unit::KilowattHour,
            Some(dec!(12500)),
            Some("kWh"),
            dec!(2812.50),
            "EDF Energy",
            "Business electricity supply",
        );
        assert_eq!(q, dec!(12500));
    }

    #[test]
    fn test_explicit_quantity_ignores_amount() {
        // Same quantity regardless of the currency amount.
        let a = resolve_quantity(&Unit::Litre, Some(dec!(40)), Some("litre"), dec!(60), "", "");
        let b = resolve_quantity(&Unit::Litre, Some(dec!(40)), Some("litre"), dec!(9000), "", "");
        assert_eq!(a, b);
        assert_eq!(a, dec!(40));
    }

    #[test]
    fn test_currency_unit_uses_amount() {
        let q = resolve_quantity(&Unit::Gbp, None, None, dec!(450), "", "Consulting");
        assert_eq!(q, dec!(450));
    }

    #[test]
    fn test_currency_unit_preempts_mismatched_quantity() {
        // Quantity stated in a different unit than required: GBP branch wins.
        let q = resolve_quantity(&Unit::Gbp, Some(dec!(3)), Some("night"), dec!(450), "", "");
        assert_eq!(q, dec!(450));
    }

    #[test]
    fn test_kwh_estimate_needs_electric_in_text() {
        let q = resolve_quantity(
            &Unit::KilowattHour,
            None,
            None,
            dec!(1000),
            "EDF",
            "Electricity invoice",
        );
        assert_eq!(q, dec!(150.00)); // 1000 * 0.15
    }

    #[test]
    fn test_kwh_without_electric_falls_back_to_amount() {
        // Natural gas is billed in kWh but the text never says "electric",
        // so the estimate branch does not apply.
        let q = resolve_quantity(
            &Unit::KilowattHour,
            None,
            None,
            dec!(1000),
            "British Gas",
            "Natural gas supply",
        );
        assert_eq!(q, dec!(1000));
    }

    #[test]
    fn test_kwh_explicit_quantity_with_electric_text() {
        let q = resolve_quantity(
            &Unit::KilowattHour,
            Some(dec!(820)),
            None,
            dec!(1000),
            "",
            "electric heating",
        );
        assert_eq!(q, dec!(820));
    }

    #[test]
    fn test_litre_estimate() {
        let q = resolve_quantity(&Unit::Litre, None, None, dec!(90), "", "Fleet fuel");
        assert_eq!(q, dec!(60)); // 90 / 1.5
    }

    #[test]
    fn test_km_estimate() {
        let q = resolve_quantity(&Unit::Kilometre, None, None, dec!(200), "", "Rail tickets");
        assert_eq!(q, dec!(30.00)); // 200 * 0.15
    }

    #[test]
    fn test_night_defaults_to_one() {
        let q = resolve_quantity(&Unit::Night, None, None, dec!(240), "Premier Inn", "");
        assert_eq!(q, Decimal::ONE);
    }

    #[test]
    fn test_tonne_km_estimate() {
        let q = resolve_quantity(&Unit::TonneKilometre, None, None, dec!(500), "DHL", "");
        assert_eq!(q, dec!(5.00)); // 500 * 0.01
    }

    #[test]
    fn test_kg_estimate() {
        let q = resolve_quantity(&Unit::Kilogram, None, None, dec!(300), "Biffa", "");
        assert_eq!(q, dec!(150.0)); // 300 * 0.5
    }

    #[test]
    fn test_m3_estimate() {
        let q = resolve_quantity(&Unit::CubicMetre, None, None, dec!(80), "Thames Water", "");
        assert_eq!(q, dec!(40.0)); // 80 * 0.5
    }

    #[test]
    fn test_unrecognized_unit_falls_back_to_amount() {
        let q = resolve_quantity(
            &Unit::Other("tonne".into()),
            Some(dec!(2)),
            Some("kg"),
            dec!(777),
            "",
            "",
        );
        assert_eq!(q, dec!(777));
    }
}
