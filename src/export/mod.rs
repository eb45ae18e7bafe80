//! Export engine: sheets to PostgreSQL statements

pub mod ident;
pub mod observer;
mod rows;
mod schema;
pub mod types;
pub mod value;

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::model::{Sheet, SheetSource, Variant};
use crate::output::OutputSink;

pub use observer::{ExportObserver, NoopObserver, SkipReason, TracingObserver};
pub use rows::{insert_columns, insert_rows};
pub use schema::create_table;

/// Separator placed between the statements of consecutive sheets
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// What was written for one sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub name: String,
    pub table: String,
    pub variant: Variant,
    pub columns: usize,
    pub rows: usize,
}

/// Result of a completed export
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Exported sheets in output order
    pub sheets: Vec<SheetSummary>,
    /// Sheets left out, with the reason
    pub skipped: Vec<(String, String)>,
    /// Size of the artifact in bytes
    pub bytes: usize,
}

impl ExportSummary {
    pub fn total_rows(&self) -> usize {
        self.sheets.iter().map(|s| s.rows).sum()
    }
}

/// Drives the export of every sheet of a source
pub struct Exporter<O: ExportObserver = TracingObserver> {
    exclude_patterns: Vec<String>,
    observer: O,
}

impl Default for Exporter<TracingObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter<TracingObserver> {
    /// Create an exporter that reports through `tracing`
    pub fn new() -> Self {
        Self::with_observer(TracingObserver)
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new().with_exclude_patterns(config.exclude_patterns.clone())
    }
}

impl<O: ExportObserver> Exporter<O> {
    pub fn with_observer(observer: O) -> Self {
        Self {
            exclude_patterns: Vec::new(),
            observer,
        }
    }

    /// Skip sheets whose name contains any of these substrings
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Render all sheets into one SQL text without writing it anywhere
    pub fn render(&mut self, source: &dyn SheetSource) -> Result<(String, ExportSummary)> {
        let mut summary = ExportSummary::default();
        let mut imports = Vec::new();

        for name in source.available_sheets() {
            if self.is_excluded(&name) {
                self.skip(&mut summary, &name, SkipReason::Excluded);
                continue;
            }

            let sheet = source
                .sheet(&name)
                .ok_or_else(|| ExportError::SheetNotFound(name.clone()))?;

            let header = sheet.header();
            self.observer
                .sheet_started(&name, header.variant, sheet.row_count());

            if sheet.row_count() == 0 {
                self.skip(&mut summary, &name, SkipReason::Empty);
                continue;
            }

            let text = self.render_sheet(sheet)?;
            self.observer.sheet_exported(&name, text.len());
            imports.push(text);

            summary.sheets.push(SheetSummary {
                name: name.clone(),
                table: ident::table_identifier(&name),
                variant: header.variant,
                columns: header.column_count(),
                rows: sheet.row_count(),
            });
        }

        let sql = imports.join(LINE_SEPARATOR);
        summary.bytes = sql.len();
        Ok((sql, summary))
    }

    /// Render all sheets and hand the text to `sink` in a single write
    pub fn export(
        &mut self,
        source: &dyn SheetSource,
        sink: &mut dyn OutputSink,
    ) -> Result<ExportSummary> {
        let (sql, summary) = self.render(source)?;
        sink.write_artifact(&sql)?;
        Ok(summary)
    }

    fn render_sheet(&mut self, sheet: &Sheet) -> Result<String> {
        let mut sb = create_table(sheet)?;
        sb.push('\n');

        let header = sheet.header();
        let names = insert_columns(header.variant, &header.columns);
        let key_count = names.len() - header.columns.len();
        for (column, normalized) in header.columns.iter().zip(&names[key_count..]) {
            self.observer
                .identifier_normalized(&column.name_or_fallback(), normalized);
        }

        if let Some(inserts) = insert_rows(sheet) {
            sb.push_str(&inserts);
        }
        Ok(sb)
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|p| !p.is_empty() && name.contains(p.as_str()))
    }

    fn skip(&mut self, summary: &mut ExportSummary, name: &str, reason: SkipReason) {
        self.observer.sheet_skipped(name, reason);
        summary.skipped.push((name.to_string(), reason.to_string()));
    }
}
