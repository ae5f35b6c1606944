//! Listing self-check
//!
//! The individual pass builds the single, married and deceased listings as it
//! goes. Here they are rebuilt straight from the tables and every listed id
//! missing from the rebuilt listing counts as one violation.

use rustc_hash::FxHashSet;

use super::RuleContext;
use super::report::{Category, ViolationReport};
use crate::models::Individual;

/// Compare the listings on `report` against independently rebuilt ones
pub fn cross_check(ctx: &RuleContext<'_>, report: &mut ViolationReport) {
    let individuals = &ctx.tree.individuals;
    let rebuilt_single = rebuild(individuals.filter(|i| !i.is_married()));
    let rebuilt_married = rebuild(individuals.filter(Individual::is_married));
    let rebuilt_deceased = rebuild(individuals.filter(Individual::is_deceased));

    let checks = [
        (Category::SingleList, report.listings.single.clone(), rebuilt_single),
        (Category::MarriedList, report.listings.married.clone(), rebuilt_married),
        (Category::DeceasedList, report.listings.deceased.clone(), rebuilt_deceased),
    ];

    for (category, listed, rebuilt) in checks {
        for id in listed.iter().filter(|id| !rebuilt.contains(id.as_str())) {
            report.record(category, id, format!("{id} is not in the rebuilt {category}"));
        }
    }

    log::info!(
        "Listings: {} single, {} married, {} deceased",
        report.listings.single.len(),
        report.listings.married.len(),
        report.listings.deceased.len()
    );
}

fn rebuild(individuals: Vec<&Individual>) -> FxHashSet<&str> {
    individuals.into_iter().map(|i| i.id.as_str()).collect()
}
