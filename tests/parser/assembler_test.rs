use gedcom_audit::{IssueKind, Sex};

use crate::utils::{date, parse};

#[test]
fn test_scenario_john_smith() {
    let tree = parse("0 @I1@ INDI\n1 NAME John /Smith/\n1 SEX M\n1 BIRT\n2 DATE 01 JAN 1950\n");
    let john = tree.individual("@I1@").unwrap();
    assert_eq!(john.name.as_deref(), Some("John /Smith/"));
    assert_eq!(john.sex, Sex::Male);
    assert_eq!(john.birth_date, Some(date(1950, 1, 1)));
    assert_eq!(john.death_date, None);
}

#[test]
fn test_each_duplicate_adds_one_repetitive_id() {
    let doc = "0 @I1@ INDI\n0 @I1@ INDI\n0 @I1@ INDI\n0 @F1@ FAM\n0 @F1@ FAM\n";
    let tree = parse(doc);
    let repeated = tree
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::RepetitiveId)
        .count();
    assert_eq!(repeated, 3);
    assert_eq!(tree.individuals.len(), 1);
    assert_eq!(tree.families.len(), 1);
}

#[test]
fn test_family_marriage_date_round_trip() {
    let doc = "0 @I1@ INDI\n1 SEX M\n0 @I2@ INDI\n1 SEX F\n\
               0 @F1@ FAM\n1 HUSB @I1@\n1 WIFE @I2@\n1 MARR\n2 DATE 12 AUG 1981\n\
               1 DIV\n2 DATE 03 FEB 1990\n";
    let tree = parse(doc);
    let family = tree.family("@F1@").unwrap();
    assert_eq!(tree.marriage_date(family), Some(date(1981, 8, 12)));

    let wife = tree.wife(family).unwrap();
    assert_eq!(tree.divorce_date(family, wife), Some(date(1990, 2, 3)));
}

#[test]
fn test_date_does_not_leak_across_records() {
    let doc = "0 @I1@ INDI\n1 DEAT\n0 @F1@ FAM\n2 DATE 01 JAN 1990\n";
    let tree = parse(doc);
    assert_eq!(tree.individual("@I1@").unwrap().death_date, None);
    assert_eq!(tree.issues.len(), 1);
    assert_eq!(tree.issues[0].kind, IssueKind::DanglingDate);
    assert_eq!(tree.issues[0].line, 4);
}

#[test]
fn test_family_date_before_spouses_are_known() {
    let doc = "0 @F1@ FAM\n1 MARR\n2 DATE 01 JAN 1990\n";
    let tree = parse(doc);
    assert_eq!(tree.issues[0].kind, IssueKind::DanglingDate);
}

#[test]
fn test_unsupported_records_do_not_touch_previous_individual() {
    let doc = "0 @I1@ INDI\n1 NAME John /Smith/\n1 SEX M\n\
               0 @S1@ SUBM\n1 NAME Submitter Person\n\
               0 @R1@ REPO\n1 NAME Archive\n1 SEX F\n";
    let tree = parse(doc);
    let john = tree.individual("@I1@").unwrap();
    assert_eq!(john.name.as_deref(), Some("John /Smith/"));
    assert_eq!(john.sex, Sex::Male);

    let unexpected = tree
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::UnexpectedTag)
        .count();
    assert_eq!(unexpected, 2);
}
