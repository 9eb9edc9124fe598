// src/services/csv_export.rs

use std::borrow::Cow;

use crate::models::sales::PeriodSummary;

const HEADER: [&str; 5] = ["period", "sales_count", "orders_count", "revenue", "expenses"];

/// Prefixa com `'` valores que planilhas interpretariam como fórmula.
fn sanitize_csv_field(val: &str) -> Cow<'_, str> {
    if val.starts_with(['=', '+', '-', '@', '\t', '\r']) {
        Cow::Owned(format!("'{val}"))
    } else {
        Cow::Borrowed(val)
    }
}

/// Serializa o relatório de tendência em CSV, na ordem recebida.
pub fn trend_to_csv(rows: &[PeriodSummary]) -> anyhow::Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::with_capacity(rows.len().saturating_mul(64)));

    wtr.write_record(HEADER)
        .map_err(|e| anyhow::anyhow!("csv write_record failed: {e}"))?;

    for row in rows {
        let period = sanitize_csv_field(&row.period);
        let sales_count = row.sales_count.to_string();
        let orders_count = row.orders_count.to_string();
        let revenue = row.revenue.to_string();
        let expenses = row.expenses.to_string();

        wtr.write_record([
            period.as_ref(),
            sales_count.as_str(),
            orders_count.as_str(),
            revenue.as_str(),
            expenses.as_str(),
        ])
        .map_err(|e| anyhow::anyhow!("csv write_record failed: {e}"))?;
    }

    wtr.into_inner()
        .map_err(|e| anyhow::anyhow!("csv flush failed: {e}"))
}
