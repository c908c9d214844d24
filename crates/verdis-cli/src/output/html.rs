use chrono::Utc;
use verdis_core::scorecard::Scorecard;

/// Render a scorecard as a standalone HTML report, suitable for printing
/// to PDF. The core only computes the scorecard; this is the renderer.
pub fn render_scorecard(s: &Scorecard) -> String {
    let generated = Utc::now().format("%Y-%m-%d %H:%M:%S");

    let scope_rows = format!(
        "<tr><td>Scope 1 - Direct emissions</td><td>{}</td></tr>\n\
         <tr><td>Scope 2 - Indirect (energy)</td><td>{}</td></tr>\n\
         <tr><td>Scope 3 - Value chain</td><td>{}</td></tr>",
        s.scope1_kg_co2e, s.scope2_kg_co2e, s.scope3_kg_co2e
    );

    let cat_rows = s
        .breakdown_by_category
        .iter()
        .map(|c| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                c.category, c.emissions_kg_co2e
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"><title>ESG Scorecard</title>
<style>
  body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 40px auto; padding: 20px; }}
  h1 {{ color: #1a5f4a; }} h2 {{ color: #2d7a63; margin-top: 24px; }}
  table {{ border-collapse: collapse; width: 100%; margin: 16px 0; }}
  th, td {{ border: 1px solid #ddd; padding: 12px; text-align: left; }}
  th {{ background: #1a5f4a; color: white; }}
  .total {{ font-weight: bold; font-size: 1.2em; }}
</style>
</head>
<body>
  <h1>ESG Compliance Scorecard</h1>
  <p>Generated: {generated} UTC</p>
  <p>Aligned with: {standards}</p>

  <h2>Emissions Summary</h2>
  <table>
    <tr><th>Scope</th><th>kg CO2e</th></tr>
    {scope_rows}
  </table>
  <p class="total">Total: {total_tonnes} tonnes CO2e</p>

  <h2>Breakdown by Category</h2>
  <table>
    <tr><th>Category</th><th>kg CO2e</th></tr>
    {cat_rows}
  </table>

  <h2>Transaction Sample</h2>
  <p>{count} transactions processed.</p>
</body>
</html>
"#,
        standards = s.standards,
        total_tonnes = s.total_tonnes_co2e,
        count = s.transaction_count,
    )
}
