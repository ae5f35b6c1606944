use gedcom_audit::{Category, RuleThresholds, Validator, resolve};

use crate::utils::{family_with_children, parse, reference_date};

fn validate(doc: &str) -> gedcom_audit::ViolationReport {
    let mut tree = parse(doc);
    resolve(&mut tree, reference_date());
    Validator::new(&RuleThresholds::default(), reference_date()).validate(&tree)
}

#[test]
fn test_sixteen_children_flag_once() {
    let report = validate(&family_with_children(16));
    assert_eq!(report.count(Category::SiblingGreaterThan15), 1);
}

#[test]
fn test_fifteen_children_are_allowed() {
    let report = validate(&family_with_children(15));
    assert_eq!(report.count(Category::SiblingGreaterThan15), 0);
    assert!(report.is_clean());
}

#[test]
fn test_custom_sibling_limit() {
    let mut tree = parse(&family_with_children(4));
    resolve(&mut tree, reference_date());
    let thresholds = RuleThresholds {
        max_siblings: 3,
        ..RuleThresholds::default()
    };
    let report = Validator::new(&thresholds, reference_date()).validate(&tree);
    assert_eq!(report.count(Category::SiblingGreaterThan15), 1);
}

#[test]
fn test_spouses_born_fifty_years_apart() {
    let doc = "0 @I1@ INDI\n1 SEX M\n1 BIRT\n2 DATE 01 JAN 1900\n1 DEAT\n2 DATE 01 JAN 1970\n\
               0 @I2@ INDI\n1 SEX F\n1 BIRT\n2 DATE 01 JAN 1850\n1 DEAT\n2 DATE 01 JAN 1920\n\
               0 @F1@ FAM\n1 HUSB @I1@\n1 WIFE @I2@\n";
    let report = validate(doc);
    assert_eq!(report.count(Category::DescendantChildrenMarriage), 1);
    assert_eq!(report.total(), 1);
}

#[test]
fn test_marriage_at_age_ten() {
    let doc = "0 @I1@ INDI\n1 BIRT\n2 DATE 01 JAN 1950\n1 MARR\n2 DATE 01 JAN 1960\n";
    let report = validate(doc);
    assert_eq!(report.count(Category::MarriageBefore14), 1);
}

#[test]
fn test_validation_is_idempotent() {
    let mut tree = parse(&family_with_children(16));
    resolve(&mut tree, reference_date());
    let validator = Validator::new(&RuleThresholds::default(), reference_date());
    assert_eq!(validator.validate(&tree).counts, validator.validate(&tree).counts);
}

#[test]
fn test_unresolved_reference() {
    let doc = "0 @I1@ INDI\n1 FAMS @F404@\n0 @F1@ FAM\n1 CHIL @I404@\n";
    let report = validate(doc);
    assert_eq!(report.count(Category::UnresolvedReference), 2);
}

#[test]
fn test_remarriage_after_divorce_is_allowed() {
    let doc = "0 @H1@ INDI\n1 SEX M\n0 @H2@ INDI\n1 SEX M\n0 @W@ INDI\n1 SEX F\n\
               0 @F1@ FAM\n1 HUSB @H1@\n1 WIFE @W@\n1 MARR\n2 DATE 01 JAN 1965\n\
               1 DIV\n2 DATE 01 JAN 1980\n\
               0 @F2@ FAM\n1 HUSB @H2@\n1 WIFE @W@\n1 MARR\n2 DATE 01 JAN 1985\n";
    let mut tree = parse(doc);
    resolve(&mut tree, reference_date());

    let second = tree.family("@F2@").unwrap();
    let wife = tree.wife(second).unwrap();
    assert_eq!(tree.divorce_date(second, wife), None);

    let report = Validator::new(&RuleThresholds::default(), reference_date()).validate(&tree);
    assert_eq!(report.count(Category::MarriageBeforeDivorce), 0);
    assert_eq!(report.count(Category::Bigamy), 0);
}

#[test]
fn test_child_checked_against_own_family_marriage() {
    let doc = "0 @H@ INDI\n1 SEX M\n0 @W1@ INDI\n1 SEX F\n0 @W2@ INDI\n1 SEX F\n\
               0 @K@ INDI\n1 BIRT\n2 DATE 01 JAN 1970\n1 FAMC @F1@\n\
               0 @F1@ FAM\n1 HUSB @H@\n1 WIFE @W1@\n1 CHIL @K@\n\
               0 @F2@ FAM\n1 HUSB @H@\n1 WIFE @W2@\n1 MARR\n2 DATE 01 JAN 1990\n";
    let mut tree = parse(doc);
    resolve(&mut tree, reference_date());
    assert_eq!(tree.marriage_date(tree.family("@F1@").unwrap()), None);

    let report = Validator::new(&RuleThresholds::default(), reference_date()).validate(&tree);
    assert_eq!(report.count(Category::ChildBirthBeforeParentsMarriage), 0);
}

#[test]
fn test_parent_age_gap_is_absolute() {
    let doc = "0 @H@ INDI\n1 SEX M\n1 BIRT\n2 DATE 01 JAN 2000\n\
               0 @K@ INDI\n1 BIRT\n2 DATE 01 JAN 1900\n1 FAMC @F1@\n\
               0 @F1@ FAM\n1 HUSB @H@\n1 CHIL @K@\n";
    let report = validate(doc);
    assert_eq!(report.count(Category::ParentsTooOld), 1);
}
