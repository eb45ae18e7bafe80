//! Batched `INSERT` emission

use crate::model::{Column, RawValue, Sheet, SheetRows, Variant};

use super::ident::{column_identifier, table_identifier, KEY_COLUMN, SUBKEY_COLUMN};
use super::value::encode;

/// Column list of the `INSERT` statement, key columns first
pub fn insert_columns(variant: Variant, columns: &[Column]) -> Vec<String> {
    let mut names = vec![KEY_COLUMN.to_string()];
    if variant == Variant::Dual {
        names.push(SUBKEY_COLUMN.to_string());
    }
    names.extend(
        columns
            .iter()
            .map(|c| column_identifier(&c.name_or_fallback())),
    );
    names
}

/// Build one batched `INSERT` for all rows of a sheet, `None` when it has none
pub fn insert_rows(sheet: &Sheet) -> Option<String> {
    if sheet.row_count() == 0 {
        return None;
    }

    let header = sheet.header();
    let column_count = header.column_count();

    let tuples: Vec<String> = match sheet.rows() {
        SheetRows::Single(rows) => rows
            .iter()
            .map(|row| tuple(&[row.key], &row.values, column_count))
            .collect(),
        SheetRows::Dual(rows) => rows
            .iter()
            .map(|row| tuple(&[row.parent_key, row.key], &row.values, column_count))
            .collect(),
    };

    Some(format!(
        "INSERT INTO {} ({}) VALUES\n{};\n",
        table_identifier(&sheet.name),
        insert_columns(header.variant, &header.columns).join(", "),
        tuples.join(",\n")
    ))
}

fn tuple(keys: &[i32], values: &[RawValue], column_count: usize) -> String {
    debug_assert_eq!(values.len(), column_count, "row width differs from header");
    let mut data: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    data.extend(values.iter().map(|v| encode(v).into_owned()));
    format!("  ( {} )", data.join(", "))
}
