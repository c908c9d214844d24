pub mod calculate;
pub mod classify;
pub mod error;
pub mod extraction;
pub mod factors;
pub mod model;
pub mod parsing;
pub mod quantity;
pub mod scorecard;

use extraction::TextExtractor;
use factors::FactorTable;
use model::{CarbonResult, DocumentResult, TransactionInput, TransactionOutcome};
use rust_decimal::Decimal;
use scorecard::BatchResult;
use tracing::warn;

/// Process a single transaction record into a carbon result.
///
/// Returns `None` only when the record's category (explicit override or
/// classified from its text) has no entry in the factor table.
pub fn process_transaction(table: &FactorTable, input: &TransactionInput) -> Option<CarbonResult> {
    score(table, input).1
}

/// Process a batch of transactions and build the scorecard.
///
/// Transactions are independent: a record with an unknown category gets a
/// null result slot and never aborts the rest. Output order matches input
/// order, so the scorecard's sample is deterministic.
pub fn process_batch(table: &FactorTable, inputs: &[TransactionInput]) -> BatchResult {
    let transactions: Vec<TransactionOutcome> = inputs
        .iter()
        .map(|input| {
            let (category, carbon_result) = score(table, input);
            TransactionOutcome {
                input: input.clone(),
                category,
                carbon_result,
            }
        })
        .collect();

    let calculated: Vec<CarbonResult> = transactions
        .iter()
        .filter_map(|t| t.carbon_result.clone())
        .collect();
    let scorecard = scorecard::build_scorecard(&calculated);

    BatchResult {
        transactions,
        scorecard,
    }
}

/// Process a raw document: extract text, recover invoice fields, classify
/// and score.
///
/// Extraction failures never fail the flow: the placeholder invoice text
/// is scored instead, so the caller always gets a structured result.
pub fn process_document(
    bytes: &[u8],
    extractor: &dyn TextExtractor,
    table: &FactorTable,
) -> DocumentResult {
    let text = match extractor.extract_text(bytes) {
        Ok(t) if !t.trim().is_empty() => t,
        Ok(_) => {
            warn!(
                backend = extractor.backend_name(),
                "extraction returned no text, using placeholder"
            );
            extraction::placeholder_text().to_string()
        }
        Err(e) => {
            warn!(
                backend = extractor.backend_name(),
                error = %e,
                "extraction failed, using placeholder"
            );
            extraction::placeholder_text().to_string()
        }
    };
    process_text(&text, table)
}

/// Process already-extracted document text.
pub fn process_text(text: &str, table: &FactorTable) -> DocumentResult {
    let extracted = parsing::extract_fields(table, text);

    let description = if extracted.description.is_empty() {
        text.chars().take(200).collect()
    } else {
        extracted.description.clone()
    };
    let input = TransactionInput {
        id: None,
        supplier: extracted.supplier.clone().unwrap_or_default(),
        description,
        amount_gbp: extracted.amount.unwrap_or(Decimal::ZERO),
        quantity: None,
        unit: None,
        category: Some(extracted.category.clone()),
        date: extracted.date.clone(),
    };
    let carbon_result = process_transaction(table, &input);

    DocumentResult {
        extracted,
        carbon_result,
        text_preview: text.chars().take(500).collect(),
    }
}

/// Resolve a record's category and score it in one pass.
fn score(table: &FactorTable, input: &TransactionInput) -> (String, Option<CarbonResult>) {
    let category = match input.category.as_deref().filter(|c| !c.is_empty()) {
        Some(c) => c.to_string(),
        None => classify::classify(table, &input.description, &input.supplier),
    };

    let carbon = match table.get(&category) {
        Some(entry) => {
            let quantity = quantity::resolve_quantity(
                &entry.unit,
                input.quantity,
                input.unit.as_deref(),
                input.amount_gbp,
                &input.supplier,
                &input.description,
            );
            calculate::calculate(table, &category, quantity)
        }
        None => None,
    };

    (category, carbon)
}
