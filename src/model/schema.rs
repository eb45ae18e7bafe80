//! Column metadata, reader types and sheet headers

use std::fmt;
use std::str::FromStr;

/// Scalar reader type of a column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarType {
    UInt32,
    Int32,
    SByte,
    Byte,
    /// Game-specific string type
    Str,
    Boolean,
    UInt16,
    Int16,
    Single,
    Double,
    /// 128-bit fixed-point value
    Quad,
    Int64,
    UInt64,
    /// A reader type this crate knows nothing about
    Other(String),
}

impl ScalarType {
    /// Short name used in game-data documents and error messages
    pub fn name(&self) -> &str {
        match self {
            ScalarType::UInt32 => "u32",
            ScalarType::Int32 => "i32",
            ScalarType::SByte => "i8",
            ScalarType::Byte => "u8",
            ScalarType::Str => "str",
            ScalarType::Boolean => "bool",
            ScalarType::UInt16 => "u16",
            ScalarType::Int16 => "i16",
            ScalarType::Single => "f32",
            ScalarType::Double => "f64",
            ScalarType::Quad => "quad",
            ScalarType::Int64 => "i64",
            ScalarType::UInt64 => "u64",
            ScalarType::Other(name) => name,
        }
    }
}

impl FromStr for ScalarType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "u32" => ScalarType::UInt32,
            "i32" => ScalarType::Int32,
            "i8" => ScalarType::SByte,
            "u8" => ScalarType::Byte,
            "str" => ScalarType::Str,
            "bool" => ScalarType::Boolean,
            "u16" => ScalarType::UInt16,
            "i16" => ScalarType::Int16,
            "f32" => ScalarType::Single,
            "f64" => ScalarType::Double,
            "quad" => ScalarType::Quad,
            "i64" => ScalarType::Int64,
            "u64" => ScalarType::UInt64,
            other => ScalarType::Other(other.to_string()),
        })
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key shape of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// One integer key per row
    Single,
    /// Parent key plus sub-key per row
    Dual,
}

impl Variant {
    /// Numeric discriminator used by the source format
    pub fn number(self) -> u8 {
        match self {
            Variant::Single => 1,
            Variant::Dual => 2,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Variant::Single),
            2 => Some(Variant::Dual),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Column metadata
#[derive(Debug, Clone)]
pub struct Column {
    /// Ordinal position in the header
    pub index: usize,
    /// Display name, if the source defines one
    pub name: Option<String>,
    /// Reader type of the values in this column
    pub scalar_type: ScalarType,
}

impl Column {
    /// Create a named column
    pub fn new(index: usize, name: impl Into<String>, scalar_type: ScalarType) -> Self {
        Self {
            index,
            name: Some(name.into()),
            scalar_type,
        }
    }

    /// Create a column without a display name
    pub fn unnamed(index: usize, scalar_type: ScalarType) -> Self {
        Self {
            index,
            name: None,
            scalar_type,
        }
    }

    /// Display name, or `unk<index>` when the column has none
    pub fn name_or_fallback(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("unk{}", self.index),
        }
    }
}

/// Column list plus key variant of a sheet
#[derive(Debug, Clone)]
pub struct Header {
    pub variant: Variant,
    pub columns: Vec<Column>,
}

impl Header {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
