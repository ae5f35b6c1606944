//! Document source helpers
//!
//! Reading the input document is the only blocking I/O in an audit run. These
//! helpers turn filesystem failures into [`AuditError`] values with enough
//! context for a user-facing message.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{AuditError, Result};

/// File extension accepted as GEDCOM input
pub const GEDCOM_EXTENSION: &str = "ged";

/// Check that a path names a GEDCOM document
pub fn ensure_gedcom_path(path: &Path) -> Result<()> {
    let is_gedcom = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(GEDCOM_EXTENSION));

    if is_gedcom {
        Ok(())
    } else {
        Err(AuditError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }
}

/// Safely read a file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
///
/// # Returns
/// * `Result<String>` - The file content, or `DocumentNotFound` / `Io`
pub fn safe_read_to_string(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(AuditError::DocumentNotFound {
            path: path.to_path_buf(),
        });
    }

    if !path.is_file() {
        return Err(AuditError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "Path is not a file"),
        ));
    }

    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(AuditError::DocumentNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(AuditError::io(path, e)),
    }
}

/// Read a GEDCOM document from storage
///
/// Validates the extension before touching the filesystem, so a wrong file type
/// is reported even when the file is missing.
pub fn read_document(path: &Path) -> Result<String> {
    ensure_gedcom_path(path)?;
    let content = safe_read_to_string(path)?;
    log::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_rejects_non_gedcom_extension() {
        let err = read_document(Path::new("family.txt")).unwrap_err();
        assert!(matches!(err, AuditError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_document_is_distinct_error() {
        let path = PathBuf::from("definitely/not/here.ged");
        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, AuditError::DocumentNotFound { .. }));
        assert_eq!(err.to_string(), "definitely/not/here.ged not found");
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(ensure_gedcom_path(Path::new("TREE.GED")).is_ok());
        assert!(ensure_gedcom_path(Path::new("tree")).is_err());
    }
}
