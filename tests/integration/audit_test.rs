use gedcom_audit::{AuditError, Category, audit_document, audit_file};
use gedcom_audit::utils::logging::{render_families, render_individuals, render_report};
use std::path::Path;

use crate::utils::{sample_path, test_config};

#[test]
fn test_sample_document() {
    let audit = audit_file(&sample_path(), &test_config()).unwrap();

    assert_eq!(audit.tree.individuals.len(), 7);
    assert_eq!(audit.tree.families.len(), 1);

    let report = &audit.report;
    assert_eq!(report.count(Category::SiblingSpacing), 1);
    assert_eq!(report.count(Category::DeathBeforeBirth), 1);
    assert_eq!(report.count(Category::MaleLastNames), 1);
    assert_eq!(report.count(Category::MarriageBefore14), 1);
    assert_eq!(report.count(Category::RepetitiveId), 1);
    assert_eq!(report.total(), 5);

    assert_eq!(report.listings.married, vec!["@I1@", "@I2@", "@I6@"]);
    assert_eq!(report.listings.single, vec!["@I3@", "@I4@", "@I5@", "@I7@"]);
    assert_eq!(report.listings.deceased, vec!["@I5@"]);
}

#[test]
fn test_sample_rendering() {
    let audit = audit_file(&sample_path(), &test_config()).unwrap();
    let individuals = render_individuals(&audit.tree);
    assert!(individuals.contains("Ghost /Two/"));
    assert!(render_families(&audit.tree).contains("1975-06-20"));
    assert!(render_report(&audit.report).contains("Total violations: 5"));
}

#[test]
fn test_sample_serializes_to_json() {
    let audit = audit_file(&sample_path(), &test_config()).unwrap();
    let json = serde_json::to_value(&audit).unwrap();
    assert_eq!(json["report"]["counts"]["SiblingSpacing"], 1);
    assert_eq!(json["report"]["counts"]["RepetitiveID"], 1);
    assert_eq!(json["tree"]["individuals"][0]["id"], "@I1@");
}

#[test]
fn test_audit_is_deterministic() {
    let text = std::fs::read_to_string(sample_path()).unwrap();
    let first = audit_document(&text, &test_config()).unwrap();
    let second = audit_document(&text, &test_config()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_document() {
    let err = audit_file(Path::new("tests/data/missing.ged"), &test_config()).unwrap_err();
    assert!(matches!(err, AuditError::DocumentNotFound { .. }));
}

#[test]
fn test_malformed_document_fails_whole_run() {
    let err = audit_document("0 HEAD\nnot a line\n", &test_config()).unwrap_err();
    assert_eq!(err.to_string(), "invalid line at position 2: not a line");
}
