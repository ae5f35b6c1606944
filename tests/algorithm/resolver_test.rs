use gedcom_audit::resolve;

use crate::utils::{date, parse, reference_date};

const DOC: &str = "0 @I1@ INDI\n1 NAME Abe /Lin/\n1 SEX M\n1 BIRT\n2 DATE 12 FEB 1909\n\
                   1 DEAT\n2 DATE 15 APR 1965\n1 FAMS @F1@\n\
                   0 @I2@ INDI\n1 NAME Mae /Lin/\n1 SEX F\n1 BIRT\n2 DATE 31 DEC 1912\n1 FAMS @F1@\n\
                   0 @I3@ INDI\n1 NAME Bo /Lin/\n1 SEX M\n1 BIRT\n2 DATE 01 JUN 1940\n1 FAMC @F1@\n\
                   0 @F1@ FAM\n1 HUSB @I1@\n1 WIFE @I2@\n1 CHIL @I3@\n";

#[test]
fn test_age_invariant() {
    let mut tree = parse(DOC);
    resolve(&mut tree, reference_date());

    let dead = tree.individual("@I1@").unwrap();
    assert!(!dead.alive);
    assert_eq!(dead.age, Some(1965 - 1909));

    // year-only subtraction, even though the birthday is on 31 DEC
    let alive = tree.individual("@I2@").unwrap();
    assert!(alive.alive);
    assert_eq!(alive.age, Some(2020 - 1912));
}

#[test]
fn test_parents_spouse_and_children() {
    let mut tree = parse(DOC);
    resolve(&mut tree, reference_date());

    let child = tree.individual("@I3@").unwrap();
    assert_eq!(child.father.as_deref(), Some("@I1@"));
    assert_eq!(child.mother.as_deref(), Some("@I2@"));

    let mother = tree.individual("@I2@").unwrap();
    assert_eq!(mother.spouse.as_deref(), Some("@I1@"));
    assert_eq!(mother.children, vec!["@I3@".to_string()]);
}

#[test]
fn test_resolution_is_deterministic() {
    let mut first = parse(DOC);
    let mut second = parse(DOC);
    resolve(&mut first, date(2000, 1, 1));
    resolve(&mut second, date(2000, 1, 1));
    assert_eq!(first, second);

    resolve(&mut first, date(2000, 1, 1));
    assert_eq!(first, second);
}
