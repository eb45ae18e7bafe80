//! Data model for game-data sheets

mod schema;
mod source;
mod table;

pub use schema::{Column, Header, ScalarType, Variant};
pub use source::{GameData, SheetSource};
pub use table::{Quad, RawValue, Row, Sheet, SheetRows, SubRow};
