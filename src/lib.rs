//! A Rust library for parsing GEDCOM genealogy documents and auditing the
//! resulting family graph against a catalogue of consistency rules.

pub mod algorithm;
pub mod audit;
pub mod collections;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{AuditConfig, RuleThresholds};
pub use error::{AuditError, Result};

// Graph model
pub use collections::{FamilyTree, Table};
pub use models::{EntityModel, Family, Individual, LifeEvent, MarriageRecord, Sex};

// Pipeline stages
pub use algorithm::{Category, Finding, Listings, Validator, ViolationReport, resolve};
pub use audit::{Audit, audit_document, audit_file};
pub use parser::{IssueKind, ParseIssue, parse_document};
