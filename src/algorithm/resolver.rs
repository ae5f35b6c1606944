//! Relationship resolver
//!
//! Computes the derived fields of every individual: age, alive, spouse,
//! children, father and mother. Derived fields are cleared first, so resolving
//! the same tree twice gives the same result.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::collections::FamilyTree;
use crate::models::{Individual, Sex};

/// Resolve derived attributes against `reference_date`
///
/// Missing references degrade to `None` with a warning; resolution never fails.
pub fn resolve(tree: &mut FamilyTree, reference_date: NaiveDate) {
    for individual in tree.individuals.values_mut() {
        individual.clear_derived();
        individual.alive = individual.death_date.is_none();
        individual.age = individual.age_at(&reference_date);
    }

    let parentage = collect_parentage(tree);
    let spouse_links = collect_spouse_links(tree);

    for (child_id, (father, mother)) in parentage {
        if let Some(child) = tree.individuals.get_mut(&child_id) {
            child.father = father;
            child.mother = mother;
        }
    }

    for (id, (spouse, children)) in spouse_links {
        if let Some(individual) = tree.individuals.get_mut(&id) {
            individual.spouse = spouse;
            individual.children = children;
        }
    }

    log::info!(
        "Resolved relationships for {} individuals against {}",
        tree.individuals.len(),
        reference_date
    );
}

type Parents = (Option<String>, Option<String>);

/// Father and mother per child id, from the families' HUSB/WIFE/CHIL lines
fn collect_parentage(tree: &FamilyTree) -> FxHashMap<String, Parents> {
    let mut parentage: FxHashMap<String, Parents> = FxHashMap::default();

    for family in tree.families.iter_sorted() {
        let father = tree
            .husband(family)
            .filter(|h| h.sex == Sex::Male)
            .map(|h| h.id.clone());
        let mother = tree
            .wife(family)
            .filter(|w| w.sex == Sex::Female)
            .map(|w| w.id.clone());

        for spouse in family.spouses() {
            if tree.individual(spouse).is_none() {
                log::warn!("Family {} refers to unknown spouse {}", family.id, spouse);
            }
        }

        for child_id in &family.children {
            if tree.individual(child_id).is_none() {
                log::warn!("Family {} refers to unknown child {}", family.id, child_id);
                continue;
            }
            let entry = parentage.entry(child_id.clone()).or_default();
            if father.is_some() {
                entry.0.clone_from(&father);
            }
            if mother.is_some() {
                entry.1.clone_from(&mother);
            }
        }
    }

    parentage
}

/// Spouse and ordered children per individual, from their FAMS families
fn collect_spouse_links(
    tree: &FamilyTree,
) -> FxHashMap<String, (Option<String>, Vec<String>)> {
    tree.individuals
        .iter_sorted()
        .map(|individual| {
            let links = spouse_links_for(tree, individual);
            (individual.id.clone(), links)
        })
        .collect()
}

fn spouse_links_for(tree: &FamilyTree, individual: &Individual) -> (Option<String>, Vec<String>) {
    let mut spouse = None;
    let mut children: Vec<String> = Vec::new();

    for family_id in &individual.spouse_families {
        let Some(family) = tree.family(family_id) else {
            log::warn!("{} refers to unknown family {}", individual.id, family_id);
            continue;
        };

        if let Some(other) = family.other_spouse(&individual.id) {
            spouse = Some(other.to_string());
        }
        for child in &family.children {
            if !children.contains(child) {
                children.push(child.clone());
            }
        }
    }

    if let Some(family_id) = individual.child_family.as_deref() {
        if tree.family(family_id).is_none() {
            log::warn!("{} refers to unknown family {}", individual.id, family_id);
        }
    }

    (spouse, children)
}
