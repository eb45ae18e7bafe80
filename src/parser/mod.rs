//! Loaders that build the in-memory game data

mod json;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Result};

use crate::model::GameData;

pub use self::json::{parse_reader, JsonParser};

/// Trait for game-data loaders
pub trait Parser: Send + Sync {
    /// Parse a file into game data
    fn parse(&self, path: &Path) -> Result<GameData>;

    /// Check if this parser can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for choosing a parser based on file extension
pub struct ParserFactory {
    parsers: Vec<Box<dyn Parser>>,
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserFactory {
    /// Create a new parser factory with all supported parsers
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(JsonParser)],
        }
    }

    /// Get a parser for the given file path
    pub fn get_parser(&self, path: &Path) -> Result<&dyn Parser> {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.to_lowercase(),
            None => detect_format(path).unwrap_or_default().to_string(),
        };

        for parser in &self.parsers {
            if parser.supports_extension(&ext) {
                return Ok(parser.as_ref());
            }
        }

        bail!(
            "Unsupported game-data format: {}",
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
        )
    }

    /// Parse a file using the appropriate parser
    pub fn parse(&self, path: &Path) -> Result<GameData> {
        let parser = self.get_parser(path)?;
        parser.parse(path)
    }
}

/// Detect the format of a file without an extension from its first bytes
pub fn detect_format(path: &Path) -> Option<&'static str> {
    let mut file = File::open(path).ok()?;
    let mut buffer = [0u8; 64];
    let bytes_read = file.read(&mut buffer).ok()?;

    let first = buffer[..bytes_read]
        .iter()
        .find(|b| !b.is_ascii_whitespace())?;
    (*first == b'{').then_some("json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_by_extension() {
        let factory = ParserFactory::new();
        assert!(factory.get_parser(Path::new("realm.json")).is_ok());
        assert!(factory.get_parser(Path::new("REALM.JSON")).is_ok());
        assert!(factory.get_parser(Path::new("realm.exd")).is_err());
    }

    #[test]
    fn test_detect_format_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("realm");
        std::fs::write(&path, "  \n{ \"sheets\": [] }").unwrap();

        assert_eq!(detect_format(&path), Some("json"));
        let data = ParserFactory::new().parse(&path).unwrap();
        assert!(data.is_empty());
    }
}
