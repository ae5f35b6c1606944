//! End-to-end audit pipeline
//!
//! tokenize → classify → assemble → resolve → validate

use serde::Serialize;
use std::path::Path;
use std::time::Instant;

use crate::algorithm::{Validator, ViolationReport, resolve};
use crate::collections::FamilyTree;
use crate::config::AuditConfig;
use crate::error::Result;
use crate::error::util::read_document;
use crate::parser::parse_document;
use crate::utils::logging::{log_operation_start, log_pass_complete, log_warning};

/// A resolved tree together with its violation report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Audit {
    /// The resolved family graph
    pub tree: FamilyTree,
    /// Violations found on it
    pub report: ViolationReport,
}

/// Audit a document held in memory
pub fn audit_document(text: &str, config: &AuditConfig) -> Result<Audit> {
    config.validate()?;
    let start = Instant::now();

    let mut tree = parse_document(text, &config.date_format_config)?;
    let reference_date = config.effective_reference_date();
    resolve(&mut tree, reference_date);

    let report = Validator::new(&config.thresholds, reference_date).validate(&tree);
    log_pass_complete("Audit", report.total(), Some(start.elapsed()));

    Ok(Audit { tree, report })
}

/// Read a `.ged` document from storage and audit it
pub fn audit_file(path: &Path, config: &AuditConfig) -> Result<Audit> {
    log_operation_start("Auditing", path);
    let text = read_document(path)?;
    let audit = audit_document(&text, config)?;

    if !audit.tree.issues.is_empty() {
        log_warning(
            &format!("{} lines could not be fully applied", audit.tree.issues.len()),
            Some(path),
        );
    }
    Ok(audit)
}
