//! Rules evaluated once per family
//!
//! Per-child and per-pair rules count one violation per offending child or
//! pair; the remaining rules count at most one violation per family.

use itertools::Itertools;
use rustc_hash::FxHashSet;

use super::RuleContext;
use super::report::{Category, ViolationReport};
use crate::collections::FamilyTree;
use crate::models::{Family, Individual, Sex};
use crate::utils::date::day_gap;

/// Check every family in ascending id order
pub fn check_families(ctx: &RuleContext<'_>, report: &mut ViolationReport) {
    for family in ctx.tree.families.iter_sorted() {
        let husband = ctx.tree.husband(family);
        let wife = ctx.tree.wife(family);
        let children: Vec<&Individual> = ctx.tree.children(family).collect();

        spouse_birth_gap(ctx, family, husband, wife, report);
        too_many_siblings(ctx, family, report);
        parents_too_old(ctx, family, husband, wife, &children, report);
        unique_first_names(family, husband, wife, &children, report);
        sibling_spacing(ctx, family, &children, report);
        male_last_names(family, husband, &children, report);
        births_against_parents(ctx, family, husband, &children, report);
        marriage_and_divorce(ctx.tree, family, husband, wife, report);
        sibling_marriage(family, husband, wife, report);
        proper_gender(family, husband, wife, report);
        cousin_and_aunt_uncle_marriages(ctx.tree, family, &children, report);
    }
}

fn spouse_birth_gap(
    ctx: &RuleContext<'_>,
    family: &Family,
    husband: Option<&Individual>,
    wife: Option<&Individual>,
    report: &mut ViolationReport,
) {
    let (Some(h), Some(w)) = (
        husband.and_then(|h| h.birth_date),
        wife.and_then(|w| w.birth_date),
    ) else {
        return;
    };

    let gap = day_gap(h, w);
    if gap > ctx.thresholds.max_spouse_birth_gap_days {
        report.record(
            Category::DescendantChildrenMarriage,
            &family.id,
            format!("spouses were born {gap} days apart"),
        );
    }
}

fn too_many_siblings(ctx: &RuleContext<'_>, family: &Family, report: &mut ViolationReport) {
    if family.family_size() > ctx.thresholds.max_siblings {
        report.record(
            Category::SiblingGreaterThan15,
            &family.id,
            format!("has {} children", family.family_size()),
        );
    }
}

fn parents_too_old(
    ctx: &RuleContext<'_>,
    family: &Family,
    husband: Option<&Individual>,
    wife: Option<&Individual>,
    children: &[&Individual],
    report: &mut ViolationReport,
) {
    let limits = [
        (husband, ctx.thresholds.max_father_age_gap_days, "father"),
        (wife, ctx.thresholds.max_mother_age_gap_days, "mother"),
    ];

    for child in children {
        let Some(child_birth) = child.birth_date else {
            continue;
        };
        for (parent, limit, role) in &limits {
            let Some(parent_birth) = parent.and_then(|p| p.birth_date) else {
                continue;
            };
            let gap = day_gap(parent_birth, child_birth);
            if gap > *limit {
                report.record(
                    Category::ParentsTooOld,
                    &family.id,
                    format!("{role} is {gap} days older than child {}", child.id),
                );
            }
        }
    }
}

fn unique_first_names(
    family: &Family,
    husband: Option<&Individual>,
    wife: Option<&Individual>,
    children: &[&Individual],
    report: &mut ViolationReport,
) {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let members = husband.into_iter().chain(wife).chain(children.iter().copied());

    for member in members {
        let Some(first) = member.given_name() else {
            continue;
        };
        if !seen.insert(first) {
            report.record(
                Category::UniqueFirstNames,
                &family.id,
                format!("{} repeats the first name {first}", member.id),
            );
        }
    }
}

fn sibling_spacing(
    ctx: &RuleContext<'_>,
    family: &Family,
    children: &[&Individual],
    report: &mut ViolationReport,
) {
    let window = ctx.thresholds.multiple_birth_window_days;
    let spacing = ctx.thresholds.sibling_spacing_days;
    let mut multiple_births = 0usize;

    let born: Vec<&Individual> = children
        .iter()
        .copied()
        .filter(|c| c.birth_date.is_some())
        .collect();

    for (a, b) in born.iter().tuple_combinations() {
        let (Some(birth_a), Some(birth_b)) = (a.birth_date, b.birth_date) else {
            continue;
        };
        let gap = day_gap(birth_a, birth_b);
        if gap < window {
            multiple_births += 1;
        } else if gap < spacing {
            report.record(
                Category::SiblingSpacing,
                &family.id,
                format!("{} and {} were born {gap} days apart", a.id, b.id),
            );
        }
    }

    if multiple_births > ctx.thresholds.max_multiple_birth_pairs {
        report.record(
            Category::MultipleSiblings,
            &family.id,
            format!("{multiple_births} sibling pairs born less than {window} days apart"),
        );
    }
}

fn male_last_names(
    family: &Family,
    husband: Option<&Individual>,
    children: &[&Individual],
    report: &mut ViolationReport,
) {
    let Some(father_surname) = husband.and_then(Individual::surname) else {
        return;
    };

    for child in children.iter().filter(|c| c.sex == Sex::Male) {
        if let Some(surname) = child.surname() {
            if surname != father_surname {
                report.record(
                    Category::MaleLastNames,
                    &family.id,
                    format!(
                        "{} has surname {surname}, father has {father_surname}",
                        child.id
                    ),
                );
            }
        }
    }
}

fn births_against_parents(
    ctx: &RuleContext<'_>,
    family: &Family,
    husband: Option<&Individual>,
    children: &[&Individual],
    report: &mut ViolationReport,
) {
    let married = ctx.tree.marriage_date(family);
    let father_death = husband.and_then(|h| h.death_date);

    for child in children {
        let Some(birth) = child.birth_date else {
            continue;
        };
        if let Some(married) = married.filter(|m| birth < *m) {
            report.record(
                Category::ChildBirthBeforeParentsMarriage,
                &family.id,
                format!("{} was born {birth} before the marriage on {married}", child.id),
            );
        }
        if let Some(death) = father_death.filter(|d| birth > *d) {
            report.record(
                Category::DeathBeforeBirthParents,
                &family.id,
                format!("{} was born {birth} after the father died on {death}", child.id),
            );
        }
    }
}

fn marriage_and_divorce(
    tree: &FamilyTree,
    family: &Family,
    husband: Option<&Individual>,
    wife: Option<&Individual>,
    report: &mut ViolationReport,
) {
    for spouse in husband.into_iter().chain(wife) {
        let divorced = tree.divorce_date(family, spouse);
        let Some(divorced) = divorced else {
            continue;
        };

        if let Some(married) = tree
            .spouse_marriage_date(family, spouse)
            .filter(|m| *m > divorced)
        {
            report.record(
                Category::MarriageBeforeDivorce,
                &family.id,
                format!("{} married {married} after divorcing on {divorced}", spouse.id),
            );
        }

        if let Some(death) = spouse.death_date.filter(|d| divorced > *d) {
            report.record(
                Category::DivorceAfterDeath,
                &family.id,
                format!("{} divorced {divorced} after dying on {death}", spouse.id),
            );
        }
    }
}

fn sibling_marriage(
    family: &Family,
    husband: Option<&Individual>,
    wife: Option<&Individual>,
    report: &mut ViolationReport,
) {
    let (Some(h), Some(w)) = (
        husband.and_then(|h| h.child_family.as_deref()),
        wife.and_then(|w| w.child_family.as_deref()),
    ) else {
        return;
    };

    if h == w {
        report.record(
            Category::SiblingMarriageError,
            &family.id,
            format!("spouses are siblings in {h}"),
        );
    }
}

fn proper_gender(
    family: &Family,
    husband: Option<&Individual>,
    wife: Option<&Individual>,
    report: &mut ViolationReport,
) {
    let (Some(h), Some(w)) = (husband, wife) else {
        return;
    };
    if h.sex.is_known() && h.sex == w.sex {
        report.record(
            Category::ProperGender,
            &family.id,
            format!("both spouses are recorded as {}", h.sex),
        );
    }
}

/// Spouses of the grandchildren, checked against this family's children
fn cousin_and_aunt_uncle_marriages(
    tree: &FamilyTree,
    family: &Family,
    children: &[&Individual],
    report: &mut ViolationReport,
) {
    let child_ids: FxHashSet<&str> = family.children.iter().map(String::as_str).collect();
    let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();

    for child in children {
        for grandchild in offspring(tree, child) {
            for spouse in spouses(tree, grandchild) {
                if !seen.insert((grandchild.id.as_str(), spouse.id.as_str())) {
                    continue;
                }

                if child_ids.contains(spouse.id.as_str()) {
                    report.record(
                        Category::AuntUncleMarriage,
                        &family.id,
                        format!("{} married {}, a sibling of a parent", grandchild.id, spouse.id),
                    );
                    continue;
                }

                let same_parents = spouse.child_family.is_some()
                    && spouse.child_family == grandchild.child_family;
                let parent_is_child = parents(tree, spouse)
                    .any(|parent| child_ids.contains(parent.id.as_str()));
                if parent_is_child && !same_parents {
                    report.record(
                        Category::FirstCousinMarriage,
                        &family.id,
                        format!("{} married first cousin {}", grandchild.id, spouse.id),
                    );
                }
            }
        }
    }
}

/// Children of every family `individual` is a spouse in
fn offspring<'a>(tree: &'a FamilyTree, individual: &'a Individual) -> Vec<&'a Individual> {
    individual
        .spouse_families
        .iter()
        .filter_map(|id| tree.family(id))
        .flat_map(|f| tree.children(f))
        .unique_by(|c| c.id.clone())
        .collect()
}

/// Other spouse of every family `individual` is a spouse in
fn spouses<'a>(tree: &'a FamilyTree, individual: &'a Individual) -> Vec<&'a Individual> {
    individual
        .spouse_families
        .iter()
        .filter_map(|id| tree.family(id))
        .filter_map(|f| f.other_spouse(&individual.id))
        .filter_map(|id| tree.individual(id))
        .collect()
}

fn parents<'a>(tree: &'a FamilyTree, individual: &Individual) -> impl Iterator<Item = &'a Individual> {
    let family = individual.child_family.as_deref().and_then(|id| tree.family(id));
    family
        .into_iter()
        .flat_map(|f| tree.husband(f).into_iter().chain(tree.wife(f)))
}
