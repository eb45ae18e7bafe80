//! Sheet, Row, SubRow and raw cell values

use super::schema::{Column, Header, Variant};

/// A 128-bit fixed-point value as stored by the game data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quad(u128);

impl Quad {
    pub fn from_bits(bits: u128) -> Self {
        Quad(bits)
    }

    /// Widen to a signed 64-bit integer (low 64 bits, two's complement)
    pub fn to_i64(self) -> i64 {
        self.0 as u64 as i64
    }
}

impl From<i64> for Quad {
    fn from(v: i64) -> Self {
        Quad(v as i128 as u128)
    }
}

/// A raw cell value as read from a sheet
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Quad(Quad),
    /// Game string
    Text(String),
}

impl RawValue {
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<i32> for RawValue {
    fn from(i: i32) -> Self {
        RawValue::I32(i)
    }
}

impl From<u32> for RawValue {
    fn from(i: u32) -> Self {
        RawValue::U32(i)
    }
}

impl From<Quad> for RawValue {
    fn from(q: Quad) -> Self {
        RawValue::Quad(q)
    }
}

impl<T> From<Option<T>> for RawValue
where
    T: Into<RawValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => RawValue::Null,
        }
    }
}

/// A record of a single-key sheet
#[derive(Debug, Clone)]
pub struct Row {
    pub key: i32,
    /// Raw values in column order
    pub values: Vec<RawValue>,
}

impl Row {
    pub fn new(key: i32, values: Vec<RawValue>) -> Self {
        Self { key, values }
    }

    /// Get the raw value at a column index
    pub fn raw(&self, index: usize) -> Option<&RawValue> {
        self.values.get(index)
    }
}

/// A record of a dual-key sheet
#[derive(Debug, Clone)]
pub struct SubRow {
    pub key: i32,
    /// Key of the parent row this sub-row belongs to
    pub parent_key: i32,
    /// Raw values in column order
    pub values: Vec<RawValue>,
}

impl SubRow {
    pub fn new(parent_key: i32, key: i32, values: Vec<RawValue>) -> Self {
        Self {
            key,
            parent_key,
            values,
        }
    }

    /// Get the raw value at a column index
    pub fn raw(&self, index: usize) -> Option<&RawValue> {
        self.values.get(index)
    }
}

/// Rows of a sheet; the variant decides the key shape
#[derive(Debug, Clone)]
pub enum SheetRows {
    Single(Vec<Row>),
    Dual(Vec<SubRow>),
}

impl SheetRows {
    pub fn variant(&self) -> Variant {
        match self {
            SheetRows::Single(_) => Variant::Single,
            SheetRows::Dual(_) => Variant::Dual,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SheetRows::Single(rows) => rows.len(),
            SheetRows::Dual(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of raw values of each row
    fn widths(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        match self {
            SheetRows::Single(rows) => Box::new(rows.iter().map(|r| r.values.len())),
            SheetRows::Dual(rows) => Box::new(rows.iter().map(|r| r.values.len())),
        }
    }
}

/// One logical table of game data
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    header: Header,
    rows: SheetRows,
}

impl Sheet {
    /// Create a sheet; the header variant follows the shape of `rows`
    ///
    /// Every row must carry exactly one value per column.
    pub fn new(name: impl Into<String>, columns: Vec<Column>, rows: SheetRows) -> Self {
        debug_assert!(
            rows.widths().all(|w| w == columns.len()),
            "every row needs exactly {} values",
            columns.len()
        );
        Self {
            name: name.into(),
            header: Header {
                variant: rows.variant(),
                columns,
            },
            rows,
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn rows(&self) -> &SheetRows {
        &self.rows
    }

    /// Number of rows (or sub-rows)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.header.column_count()
    }
}
