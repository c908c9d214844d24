use std::path::{Path, PathBuf};
use verdis_core::error::VerdisError;
use verdis_core::factors::{builtin, defra_xlsx};

pub fn list() -> Result<(), VerdisError> {
    let table = builtin::load_preset(builtin::DEFAULT_PRESET)?;
    println!("{} (v{})\n", table.name(), table.version());

    let max_name = table
        .entries()
        .iter()
        .map(|e| e.category.len())
        .max()
        .unwrap_or(20);

    println!(
        "  {:<width$}  {:<10}  {:<12}  Scope",
        "Category",
        "Factor",
        "Unit",
        width = max_name
    );
    println!("  {}", "-".repeat(max_name + 40));
    for entry in table.entries() {
        println!(
            "  {:<width$}  {:<10}  {:<12}  {}",
            entry.category,
            entry.emission_factor.to_string(),
            entry.unit.to_string(),
            entry.scope,
            width = max_name
        );
    }

    Ok(())
}

pub fn show(category: &str) -> Result<(), VerdisError> {
    let table = builtin::load_preset(builtin::DEFAULT_PRESET)?;

    let entry = table.get(category).ok_or_else(|| {
        VerdisError::FactorTableInvalid(format!(
            "unknown category '{category}'. Run `verdis factors list` to see all keys."
        ))
    })?;

    println!("{}", entry.category);
    println!("  Subcategory: {}", entry.subcategory);
    println!("  Scope:       {}", entry.scope);
    println!("  Factor:      {} kg CO2e per {}", entry.emission_factor, entry.unit);

    let terms: Vec<&str> = table
        .keyword_groups()
        .iter()
        .filter(|g| g.category == category)
        .flat_map(|g| g.terms.iter().map(|t| t.as_str()))
        .collect();
    if terms.is_empty() {
        println!("  Keywords:    (none; reachable only via fallback rules or override)");
    } else {
        println!("  Keywords:    {}", terms.join(", "));
    }

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), VerdisError> {
    let table = verdis_core::factors::load_table(file)?;

    println!(
        "Factor table '{}' (v{}) is valid.",
        table.name(),
        table.version()
    );
    println!("  Factors: {} categories", table.entries().len());
    println!("  Keyword groups: {}", table.keyword_groups().len());

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    let with_keywords: Vec<&str> = table
        .keyword_groups()
        .iter()
        .map(|g| g.category.as_str())
        .collect();
    for entry in table.entries() {
        if !with_keywords.contains(&entry.category.as_str()) {
            warnings.push(format!(
                "category '{}' has no keywords and can only be reached via fallback rules or explicit override",
                entry.category
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

pub fn convert(xlsx_file: &Path, year: &str, out: Option<PathBuf>) -> Result<(), VerdisError> {
    let bytes = std::fs::read(xlsx_file)?;
    let def = defra_xlsx::convert_defra_flat(&bytes, year)?;
    let json = serde_json::to_string_pretty(&def)?;

    match out {
        Some(path) => {
            std::fs::write(&path, json)?;
            eprintln!(
                "Converted {} factor(s), draft table written to {}",
                def.factors.len(),
                path.display()
            );
            eprintln!("Review category keys and add a keyword index before use.");
        }
        None => {
            println!("{json}");
        }
    }

    Ok(())
}
