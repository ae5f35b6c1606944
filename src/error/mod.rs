//! Error handling for the GEDCOM auditor.
//!
//! Only conditions that make the whole run meaningless are errors. Recoverable
//! anomalies inside a document are recorded as parse issues or rule violations
//! and never surface here.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for audit runs
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// The input document does not exist
    #[error("{} not found", path.display())]
    DocumentNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// The input is not a GEDCOM file
    #[error("Can only analyze gedcom files, {} does not end with .ged", path.display())]
    UnsupportedFormat {
        /// Path that was requested
        path: PathBuf,
    },

    /// Error opening or reading the document
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// A line whose level is not one of `0`, `1`, `2`, or that has no tag
    #[error("invalid line at position {line}: {content}")]
    InvalidLine {
        /// 1-based line number
        line: usize,
        /// Trimmed line content
        content: String,
    },

    /// Configuration values that cannot produce a meaningful audit
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AuditError {
    /// Build an [`AuditError::Io`] for `path`
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;
