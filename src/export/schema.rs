//! `CREATE TABLE` emission

use crate::error::{ExportError, Result};
use crate::model::{Sheet, Variant};

use super::ident::{schema_column_name, table_identifier};
use super::types::sql_type;

/// Build the `CREATE TABLE` statement for a sheet
pub fn create_table(sheet: &Sheet) -> Result<String> {
    let header = sheet.header();
    let mut sql = String::new();

    sql.push_str(&format!(
        "create table if not exists {} (\n",
        table_identifier(&sheet.name)
    ));

    match header.variant {
        Variant::Single => sql.push_str("  _key integer NOT NULL PRIMARY KEY,\n"),
        Variant::Dual => {
            sql.push_str("  _key integer NOT NULL,\n");
            sql.push_str("  _subkey integer NOT NULL,\n");
        }
    }

    for column in &header.columns {
        let ty = sql_type(&column.scalar_type).map_err(|source| ExportError::UnmappedType {
            sheet: sheet.name.clone(),
            column: column.index,
            source,
        })?;
        sql.push_str(&format!(
            "  {} {},\n",
            schema_column_name(&column.name_or_fallback()),
            ty
        ));
    }

    // Single sheets declare the key inline.
    if header.variant == Variant::Dual {
        sql.push_str("  PRIMARY KEY (_key, _subkey)\n");
    }

    sql.push_str(");\n");
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, RawValue, Row, ScalarType, SheetRows, SubRow};

    fn single_sheet(columns: Vec<Column>) -> Sheet {
        let values = vec![RawValue::Null; columns.len()];
        Sheet::new("Item", columns, SheetRows::Single(vec![Row::new(1, values)]))
    }

    #[test]
    fn test_single_variant() {
        let sheet = single_sheet(vec![
            Column::new(0, "Name", ScalarType::Str),
            Column::unnamed(1, ScalarType::UInt32),
        ]);
        let sql = create_table(&sheet).unwrap();

        assert_eq!(
            sql,
            "create table if not exists item (\n\
             \x20 _key integer NOT NULL PRIMARY KEY,\n\
             \x20 name TEXT,\n\
             \x20 unk1 bigint,\n\
             );\n"
        );
        assert!(!sql.contains("PRIMARY KEY ("));
    }

    #[test]
    fn test_dual_variant() {
        let sheet = Sheet::new(
            "quest/Step",
            vec![Column::new(0, "ItemLevel", ScalarType::UInt16)],
            SheetRows::Dual(vec![SubRow::new(1, 0, vec![RawValue::U16(5)])]),
        );
        let sql = create_table(&sheet).unwrap();

        assert_eq!(
            sql,
            "create table if not exists quest_step (\n\
             \x20 _key integer NOT NULL,\n\
             \x20 _subkey integer NOT NULL,\n\
             \x20 itemlevel integer,\n\
             \x20 PRIMARY KEY (_key, _subkey)\n\
             );\n"
        );
    }

    #[test]
    fn test_unmapped_column_type() {
        let sheet = single_sheet(vec![
            Column::new(0, "Name", ScalarType::Str),
            Column::new(1, "Big", ScalarType::Int64),
        ]);
        let err = create_table(&sheet).unwrap_err();

        match err {
            ExportError::UnmappedType {
                sheet,
                column,
                source,
            } => {
                assert_eq!(sheet, "Item");
                assert_eq!(column, 1);
                assert_eq!(source.type_name, "i64");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
