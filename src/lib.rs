//! sheetsql - Export game-data sheets as PostgreSQL statements
//!
//! Turns every non-empty sheet of a game-data store into a
//! `CREATE TABLE IF NOT EXISTS` statement and one batched `INSERT`.

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod output;
pub mod parser;

pub use config::ExportConfig;
pub use error::ExportError;
pub use export::{ExportSummary, Exporter};
pub use model::{GameData, Sheet, SheetSource};
