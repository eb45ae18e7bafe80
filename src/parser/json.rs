//! JSON game-data document parser

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::model::{
    Column, GameData, Quad, RawValue, Row, ScalarType, Sheet, SheetRows, SubRow, Variant,
};

use super::Parser;

/// Parser for game-data documents exported as JSON
pub struct JsonParser;

#[derive(Debug, Deserialize)]
struct Document {
    sheets: Vec<SheetDoc>,
}

#[derive(Debug, Deserialize)]
struct SheetDoc {
    name: String,
    #[serde(default = "single_variant")]
    variant: u8,
    columns: Vec<ColumnDoc>,
    #[serde(default)]
    rows: Vec<RowDoc>,
}

#[derive(Debug, Deserialize)]
struct ColumnDoc {
    index: Option<usize>,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type")]
    type_name: String,
}

#[derive(Debug, Deserialize)]
struct RowDoc {
    key: i32,
    #[serde(default)]
    parent: Option<i32>,
    values: Vec<Value>,
}

fn single_variant() -> u8 {
    1
}

impl Parser for JsonParser {
    fn parse(&self, path: &Path) -> Result<GameData> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open game-data file: {}", path.display()))?;
        parse_reader(BufReader::new(file))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext.eq_ignore_ascii_case("json")
    }
}

/// Parse a game-data document from any reader
pub fn parse_reader(reader: impl Read) -> Result<GameData> {
    let document: Document =
        serde_json::from_reader(reader).context("Failed to parse game-data JSON")?;

    let mut data = GameData::new();
    for doc in document.sheets {
        let name = doc.name.clone();
        ensure!(!data.contains(&name), "Duplicate sheet name: {name}");
        let sheet = build_sheet(doc).with_context(|| format!("Invalid sheet `{name}`"))?;
        data.insert(sheet);
    }
    Ok(data)
}

fn build_sheet(doc: SheetDoc) -> Result<Sheet> {
    let variant = Variant::from_number(doc.variant)
        .with_context(|| format!("Unknown variant {} (expected 1 or 2)", doc.variant))?;

    let columns: Vec<Column> = doc
        .columns
        .into_iter()
        .enumerate()
        .map(|(i, c)| Column {
            index: c.index.unwrap_or(i),
            name: c.name,
            scalar_type: c.type_name.parse().unwrap_or_else(|e| match e {}),
        })
        .collect();

    let mut single = Vec::new();
    let mut dual = Vec::new();

    for row in doc.rows {
        let values = row_values(&row, &columns)
            .with_context(|| format!("Invalid row with key {}", row.key))?;

        match (variant, row.parent) {
            (Variant::Single, None) => single.push(Row::new(row.key, values)),
            (Variant::Dual, Some(parent)) => dual.push(SubRow::new(parent, row.key, values)),
            (Variant::Single, Some(_)) => {
                bail!("Row {} has a parent key in a single-key sheet", row.key)
            }
            (Variant::Dual, None) => bail!("Sub-row {} is missing its parent key", row.key),
        }
    }

    let rows = match variant {
        Variant::Single => SheetRows::Single(single),
        Variant::Dual => SheetRows::Dual(dual),
    };
    Ok(Sheet::new(doc.name, columns, rows))
}

fn row_values(row: &RowDoc, columns: &[Column]) -> Result<Vec<RawValue>> {
    ensure!(
        row.values.len() == columns.len(),
        "Expected {} values, found {}",
        columns.len(),
        row.values.len()
    );

    row.values
        .iter()
        .zip(columns)
        .map(|(value, column)| {
            raw_value(value, &column.scalar_type)
                .with_context(|| format!("Column {}", column.name_or_fallback()))
        })
        .collect()
}

fn raw_value(value: &Value, ty: &ScalarType) -> Result<RawValue> {
    if value.is_null() {
        return Ok(RawValue::Null);
    }

    let raw = match ty {
        ScalarType::Boolean => match value {
            Value::Bool(b) => RawValue::Bool(*b),
            _ => bail!("Expected a boolean for `{ty}`, found {value}"),
        },
        ScalarType::SByte => RawValue::I8(integer(value, ty)?),
        ScalarType::Byte => RawValue::U8(integer(value, ty)?),
        ScalarType::Int16 => RawValue::I16(integer(value, ty)?),
        ScalarType::UInt16 => RawValue::U16(integer(value, ty)?),
        ScalarType::Int32 => RawValue::I32(integer(value, ty)?),
        ScalarType::UInt32 => RawValue::U32(integer(value, ty)?),
        ScalarType::Int64 => RawValue::I64(integer(value, ty)?),
        ScalarType::UInt64 => RawValue::U64(integer(value, ty)?),
        ScalarType::Single => RawValue::F32(float(value, ty)? as f32),
        ScalarType::Double => RawValue::F64(float(value, ty)?),
        ScalarType::Quad => RawValue::Quad(quad(value)?),
        ScalarType::Str => match value {
            Value::String(s) => RawValue::Text(s.clone()),
            _ => bail!("Expected a string for `{ty}`, found {value}"),
        },
        ScalarType::Other(_) => match value {
            Value::Bool(b) => RawValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => RawValue::I64(i),
                None => RawValue::F64(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => RawValue::Text(s.clone()),
            other => RawValue::Text(other.to_string()),
        },
    };
    Ok(raw)
}

fn integer<T>(value: &Value, ty: &ScalarType) -> Result<T>
where
    T: TryFrom<i64> + TryFrom<u64>,
{
    let converted = match (value.as_i64(), value.as_u64()) {
        (Some(i), _) => <T as TryFrom<i64>>::try_from(i).ok(),
        (None, Some(u)) => <T as TryFrom<u64>>::try_from(u).ok(),
        _ => bail!("Expected an integer for `{ty}`, found {value}"),
    };
    converted.with_context(|| format!("{value} is out of range for `{ty}`"))
}

fn float(value: &Value, ty: &ScalarType) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .with_context(|| format!("{n} is not representable as `{ty}`")),
        Value::String(s) => match s.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            _ => bail!("Expected a number for `{ty}`, found {value}"),
        },
        _ => bail!("Expected a number for `{ty}`, found {value}"),
    }
}

fn quad(value: &Value) -> Result<Quad> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(Quad::from)
            .with_context(|| format!("Expected an integer quad, found {n}")),
        Value::String(s) => {
            let wide: i128 = s
                .trim()
                .parse()
                .with_context(|| format!("Invalid quad value: {s:?}"))?;
            Ok(Quad::from_bits(wide as u128))
        }
        _ => bail!("Expected a quad (integer or decimal string), found {value}"),
    }
}
