use crate::factors::FactorTable;
use tracing::debug;

/// A fallback trigger: the substring set that selects a category once the
/// keyword index has produced no match.
#[derive(Debug)]
enum Trigger {
    AnyOf(&'static [&'static str]),
    AllOf(&'static [&'static str]),
}

impl Trigger {
    fn matches(&self, text: &str) -> bool {
        match self {
            Trigger::AnyOf(terms) => terms.iter().any(|t| text.contains(t)),
            Trigger::AllOf(terms) => terms.iter().all(|t| text.contains(t)),
        }
    }
}

/// Hardcoded fallback chain, evaluated top to bottom after the keyword
/// index. Earlier rules pre-empt later ones; matching is by substring,
/// never by specificity.
const FALLBACK_CHAIN: &[(Trigger, &str)] = &[
    (Trigger::AnyOf(&["electric", "power"]), "electricity"),
    (Trigger::AllOf(&["gas", "natural"]), "natural_gas"),
    (Trigger::AnyOf(&["diesel", "fuel"]), "diesel_litres"),
    (Trigger::AnyOf(&["train", "rail"]), "train_national_km"),
    (Trigger::AnyOf(&["flight", "airline"]), "flight_short_haul_km"),
    (Trigger::AnyOf(&["hotel"]), "hotel_night"),
    (
        Trigger::AnyOf(&["delivery", "freight", "courier"]),
        "freight_road_kg_km",
    ),
    (Trigger::AnyOf(&["paper", "stationery"]), "paper_tonne"),
    (
        Trigger::AnyOf(&["laptop", "computer", "printer"]),
        "office_equipment_gbp",
    ),
    (Trigger::AnyOf(&["water"]), "water_m3"),
    (Trigger::AnyOf(&["waste"]), "waste_general_kg"),
    (
        Trigger::AnyOf(&["material", "supplies"]),
        "generic_materials_gbp",
    ),
];

/// Final catch-all when nothing in the text matches.
pub const FALLBACK_CATEGORY: &str = "generic_services_gbp";

/// Map free transaction text to an emission category key.
///
/// Total: always returns a category. The keyword index is scanned in table
/// order and the first group with a matching term wins; only then is the
/// fallback chain consulted.
pub fn classify(table: &FactorTable, description: &str, supplier: &str) -> String {
    let text = format!("{description} {supplier}").to_lowercase();

    for group in table.keyword_groups() {
        if group.terms.iter().any(|t| text.contains(t.as_str())) {
            return group.category.clone();
        }
    }

    for (trigger, category) in FALLBACK_CHAIN {
        if trigger.matches(&text) {
            return (*category).to_string();
        }
    }

    debug!("no keyword or fallback match, defaulting to {FALLBACK_CATEGORY}");
    FALLBACK_CATEGORY.to_string()
}
