//! Progress reporting for exports

use crate::model::Variant;

/// Why a sheet was left out of the export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Empty,
    Excluded,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Empty => write!(f, "no rows"),
            SkipReason::Excluded => write!(f, "excluded"),
        }
    }
}

/// Receives progress events from the exporter
pub trait ExportObserver {
    fn sheet_started(&mut self, _name: &str, _variant: Variant, _rows: usize) {}

    fn sheet_skipped(&mut self, _name: &str, _reason: SkipReason) {}

    fn sheet_exported(&mut self, _name: &str, _bytes: usize) {}

    fn identifier_normalized(&mut self, _raw: &str, _normalized: &str) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ExportObserver for NoopObserver {}

/// Observer that forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ExportObserver for TracingObserver {
    fn sheet_started(&mut self, name: &str, variant: Variant, rows: usize) {
        tracing::info!(sheet = name, %variant, rows, "exporting sheet");
    }

    fn sheet_skipped(&mut self, name: &str, reason: SkipReason) {
        match reason {
            SkipReason::Empty => tracing::debug!(sheet = name, %reason, "skipping sheet"),
            SkipReason::Excluded => tracing::warn!(sheet = name, %reason, "skipping sheet"),
        }
    }

    fn sheet_exported(&mut self, name: &str, bytes: usize) {
        tracing::debug!(sheet = name, bytes, "sheet done");
    }

    fn identifier_normalized(&mut self, raw: &str, normalized: &str) {
        tracing::trace!(raw, normalized, "column identifier");
    }
}
