//! Destinations for the exported SQL text

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::error::{ExportError, Result};

mod summary;

pub use summary::render_summary;

/// Trait for artifact destinations
pub trait OutputSink {
    /// Write the complete artifact in one go
    fn write_artifact(&mut self, contents: &str) -> Result<()>;
}

/// Writes the artifact to a file, replacing it atomically
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn persist(&self, contents: &str) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Subject to the process umask, like a plain file create.
            builder.permissions(fs::Permissions::from_mode(0o644));
        }
        let mut file = builder.tempfile_in(dir)?;

        // An existing artifact keeps its permissions.
        if let Ok(existing) = fs::metadata(&self.path) {
            file.as_file().set_permissions(existing.permissions())?;
        }

        file.write_all(contents.as_bytes())?;
        file.flush()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl OutputSink for FileSink {
    fn write_artifact(&mut self, contents: &str) -> Result<()> {
        self.persist(contents).map_err(|source| ExportError::Output {
            path: self.path.clone(),
            source,
        })
    }
}

/// Writes the artifact to any `io::Write`
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write_artifact(&mut self, contents: &str) -> Result<()> {
        self.writer.write_all(contents.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

impl OutputSink for String {
    fn write_artifact(&mut self, contents: &str) -> Result<()> {
        self.push_str(contents);
        Ok(())
    }
}
