use std::path::PathBuf;

use chrono::NaiveDate;
use gedcom_audit::{AuditConfig, FamilyTree, parse_document};

/// Base path for test data files
#[must_use]
pub fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

/// Path to the sample document
#[must_use]
pub fn sample_path() -> PathBuf {
    test_data_dir().join("sample.ged")
}

/// Fixed "today" so age and future-date checks are reproducible
#[must_use]
pub fn reference_date() -> NaiveDate {
    date(2020, 1, 1)
}

/// Shorthand for a calendar date
#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Default configuration pinned to [`reference_date`]
#[must_use]
pub fn test_config() -> AuditConfig {
    AuditConfig::default().with_reference_date(reference_date())
}

/// Parse a document with the default date formats
#[must_use]
pub fn parse(text: &str) -> FamilyTree {
    parse_document(text, &test_config().date_format_config).expect("document parses")
}

/// A family record with `children` children and no dates
#[must_use]
pub fn family_with_children(children: usize) -> String {
    let mut doc = String::from(
        "0 @H@ INDI\n1 NAME Hal /Doe/\n1 SEX M\n1 FAMS @F1@\n\
         0 @W@ INDI\n1 NAME Wen /Doe/\n1 SEX F\n1 FAMS @F1@\n",
    );
    for i in 0..children {
        doc.push_str(&format!("0 @C{i}@ INDI\n1 NAME Kid{i} /Doe/\n1 FAMC @F1@\n"));
    }
    doc.push_str("0 @F1@ FAM\n1 HUSB @H@\n1 WIFE @W@\n");
    for i in 0..children {
        doc.push_str(&format!("1 CHIL @C{i}@\n"));
    }
    doc
}
