use verdis_core::model::DocumentResult;
use verdis_core::scorecard::{BatchResult, Scorecard};

pub fn print_document(result: &DocumentResult) {
    println!("=== Extracted fields ===\n");
    println!(
        "  Supplier:    {}",
        result.extracted.supplier.as_deref().unwrap_or("-")
    );
    println!(
        "  Amount:      {}",
        result
            .extracted
            .amount
            .map(|a| format!("£{a}"))
            .unwrap_or_else(|| "-".into())
    );
    println!("  Date:        {}", result.extracted.date.as_deref().unwrap_or("-"));
    println!("  Description: {}", result.extracted.description);
    println!("  Category:    {}\n", result.extracted.category);

    match &result.carbon_result {
        Some(carbon) => {
            println!("=== Carbon result ===\n");
            println!("  {} ({})", carbon.category, carbon.subcategory);
            println!("  Quantity:  {} {}", carbon.quantity, carbon.unit);
            println!(
                "  Factor:    {} kg CO2e per {}",
                carbon.emission_factor, carbon.unit
            );
            println!("  Emissions: {} kg CO2e", carbon.emissions_kg_co2e);
            println!("  Scope:     {}", carbon.scope);
        }
        None => {
            println!("=== No carbon result (category not in factor table) ===");
        }
    }
}

pub fn print_batch(result: &BatchResult) {
    let multi = result.transactions.len() > 1;
    if multi {
        println!("=== Transactions ===\n");
    }

    let max_cat = result
        .transactions
        .iter()
        .map(|t| t.category.len())
        .max()
        .unwrap_or(10);

    for t in &result.transactions {
        let label = t
            .input
            .id
            .clone()
            .unwrap_or_else(|| truncate(&t.input.description, 40));
        match &t.carbon_result {
            Some(carbon) => println!(
                "  {:<width$}  {:>12} kg CO2e  {}",
                t.category,
                carbon.emissions_kg_co2e.to_string(),
                label,
                width = max_cat
            ),
            None => println!(
                "  {:<width$}  {:>12}  {}",
                t.category,
                "no result",
                label,
                width = max_cat
            ),
        }
    }

    println!();
    print_scorecard(&result.scorecard);
}

pub fn print_scorecard(s: &Scorecard) {
    println!("=== Scorecard ===\n");
    println!("  Aligned with: {}\n", s.standards);
    println!("  Scope 1 (direct):          {:>14} kg CO2e", s.scope1_kg_co2e.to_string());
    println!("  Scope 2 (indirect energy): {:>14} kg CO2e", s.scope2_kg_co2e.to_string());
    println!("  Scope 3 (value chain):     {:>14} kg CO2e", s.scope3_kg_co2e.to_string());
    println!("  Total:                     {:>14} kg CO2e  ({} tonnes)", s.total_kg_co2e.to_string(), s.total_tonnes_co2e);
    println!("\n  {} transaction(s) calculated\n", s.transaction_count);

    if !s.breakdown_by_category.is_empty() {
        let max_cat = s
            .breakdown_by_category
            .iter()
            .map(|c| c.category.len())
            .max()
            .unwrap_or(10);
        println!("  Breakdown by category:");
        for c in &s.breakdown_by_category {
            println!(
                "    {:<width$}  {:>12} kg CO2e",
                c.category,
                c.emissions_kg_co2e.to_string(),
                width = max_cat
            );
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{head}...")
    }
}
