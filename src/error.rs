//! Per-document error taxonomy.
//!
//! A [`DocumentError`] never crosses a task boundary as a panic: the scheduler turns it into a
//! failed [`FileStats`](crate::processing::FileStats) entry and moves on to the next document.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure of a single document's read/analyze/write cycle
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Missing file, permission denied, or invalid UTF-8
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output directory could not be created or report could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Unexpected failure while analyzing, including a panicked analysis task
    #[error("Analysis error: {0}")]
    Analysis(String),
}

impl DocumentError {
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        Self::Analysis(msg.into())
    }

    /// Short stable label used in stats output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Read { .. } => "read",
            Self::Write { .. } => "write",
            Self::Analysis(_) => "analysis",
        }
    }
}
