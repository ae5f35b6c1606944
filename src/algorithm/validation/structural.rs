//! Structural checks: parse issues and dangling cross-references

use super::RuleContext;
use super::report::{Category, ViolationReport};
use crate::parser::IssueKind;

const fn category_for(kind: IssueKind) -> Category {
    match kind {
        IssueKind::RepetitiveId => Category::RepetitiveId,
        IssueKind::InvalidDate => Category::InvalidDate,
        IssueKind::DanglingDate => Category::DanglingDate,
        IssueKind::UnexpectedTag => Category::UnexpectedTag,
    }
}

/// Count parse issues and every reference to a missing individual or family
pub fn check_structure(ctx: &RuleContext<'_>, report: &mut ViolationReport) {
    for issue in &ctx.tree.issues {
        report.record(
            category_for(issue.kind),
            format!("line {}", issue.line),
            issue.detail.clone(),
        );
    }

    let tree = ctx.tree;
    for individual in tree.individuals.iter_sorted() {
        let families = individual
            .spouse_families
            .iter()
            .map(|id| ("FAMS", id))
            .chain(individual.child_family.iter().map(|id| ("FAMC", id)));

        for (tag, id) in families {
            if !tree.families.contains(id) {
                log::warn!("{} {tag} {id} does not exist", individual.id);
                report.record(
                    Category::UnresolvedReference,
                    &individual.id,
                    format!("{tag} refers to unknown family {id}"),
                );
            }
        }
    }

    for family in tree.families.iter_sorted() {
        let members = family
            .husband
            .iter()
            .map(|id| ("HUSB", id))
            .chain(family.wife.iter().map(|id| ("WIFE", id)))
            .chain(family.children.iter().map(|id| ("CHIL", id)));

        for (tag, id) in members {
            if !tree.individuals.contains(id) {
                log::warn!("{} {tag} {id} does not exist", family.id);
                report.record(
                    Category::UnresolvedReference,
                    &family.id,
                    format!("{tag} refers to unknown individual {id}"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::FamilyTree;
    use crate::config::RuleThresholds;
    use crate::models::{Family, Individual};
    use crate::parser::ParseIssue;
    use chrono::NaiveDate;

    #[test]
    fn test_unresolved_references_and_issues() {
        let mut tree = FamilyTree::new();
        let mut individual = Individual::new("@I1@");
        individual.spouse_families.push("@F9@".to_string());
        tree.individuals.insert(individual);
        let mut family = Family::new("@F1@").with_husband("@I1@").with_wife("@I2@");
        family.add_child("@I3@");
        tree.families.insert(family);
        tree.issues.push(ParseIssue {
            line: 4,
            kind: IssueKind::RepetitiveId,
            detail: "@I1@ is already defined".to_string(),
        });

        let thresholds = RuleThresholds::default();
        let ctx = RuleContext {
            tree: &tree,
            thresholds: &thresholds,
            reference_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        };
        let mut report = ViolationReport::new();
        check_structure(&ctx, &mut report);

        assert_eq!(report.count(Category::RepetitiveId), 1);
        assert_eq!(report.count(Category::UnresolvedReference), 3);
        assert_eq!(report.findings[0].subject, "line 4");
    }
}
