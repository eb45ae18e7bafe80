//! Error types for the export engine

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A column reader type with no SQL counterpart
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the type {type_name} doesn't have an SQL type mapping")]
pub struct UnmappedType {
    pub type_name: String,
}

/// Errors raised while exporting sheets
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("sheet `{sheet}`, column {column}")]
    UnmappedType {
        sheet: String,
        column: usize,
        #[source]
        source: UnmappedType,
    },

    #[error("sheet `{0}` is listed but could not be resolved")]
    SheetNotFound(String),

    #[error("failed to write {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = ExportError> = std::result::Result<T, E>;
