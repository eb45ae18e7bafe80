//! Tabular rendering of an export summary

use std::io::Write;

use anyhow::Result;
use tabled::{Table, Tabled};

use crate::export::ExportSummary;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "sheet")]
    name: String,
    table: String,
    variant: u8,
    columns: usize,
    rows: usize,
}

/// Write a table of exported sheets followed by totals
pub fn render_summary(summary: &ExportSummary, writer: &mut dyn Write) -> Result<()> {
    let rows: Vec<SummaryRow> = summary
        .sheets
        .iter()
        .map(|s| SummaryRow {
            name: s.name.clone(),
            table: s.table.clone(),
            variant: s.variant.number(),
            columns: s.columns,
            rows: s.rows,
        })
        .collect();

    if !rows.is_empty() {
        writeln!(writer, "{}", Table::new(rows))?;
    }
    writeln!(
        writer,
        "Exported {} sheets ({} rows, {} bytes), skipped {}",
        summary.sheets.len(),
        summary.total_rows(),
        summary.bytes,
        summary.skipped.len()
    )?;
    Ok(())
}
