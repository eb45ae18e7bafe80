//! Configuration handling for sheetsql

use std::path::PathBuf;

/// Default artifact name, overwritten on each run
pub const DEFAULT_OUTPUT: &str = "psql-schema.sql";

/// Configuration for an export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Game-data document to read
    pub input: PathBuf,
    /// Destination of the SQL artifact
    pub output: PathBuf,
    /// Sheet-name substrings to leave out
    pub exclude_patterns: Vec<String>,
    /// Print a table of exported sheets afterwards
    pub summary: bool,
    /// Debug-level logging
    pub verbose: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            exclude_patterns: Vec::new(),
            summary: false,
            verbose: false,
        }
    }
}

impl ExportConfig {
    /// Create a new config reading from `input`
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }

    /// Set the output path
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = output;
        self
    }

    /// Set sheet-name substrings to exclude
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    /// Enable the summary table
    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    /// Enable debug logging
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Default log filter directive for this config
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
