use crate::domain::model::RowError;
use crate::domain::ports::ErrorSink;
use crate::utils::error::Result;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

fn format_line(error: &RowError) -> String {
    format!(
        "{} - ERROR - {}",
        Local::now().format(TIMESTAMP_FORMAT),
        error
    )
}

/// Appends row errors to a plain-text log file that stays open for the whole run.
#[derive(Debug)]
pub struct FileErrorLog {
    path: PathBuf,
    file: File,
}

impl FileErrorLog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing::debug!("Error log opened at {}", path.display());
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ErrorSink for FileErrorLog {
    fn report(&mut self, error: &RowError) {
        tracing::warn!("{}", error);
        if let Err(e) = writeln!(self.file, "{}", format_line(error)) {
            tracing::warn!("Failed to write to {}: {}", self.path.display(), e);
        }
    }
}

/// Keeps formatted log lines in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryErrorLog {
    lines: Vec<String>,
}

impl MemoryErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl ErrorSink for MemoryErrorLog {
    fn report(&mut self, error: &RowError) {
        tracing::warn!("{}", error);
        self.lines.push(format_line(error));
    }
}
