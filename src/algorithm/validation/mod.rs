//! Validation engine
//!
//! Applies the rule catalogue to a resolved [`FamilyTree`] and accumulates
//! violations by category. The tree is only read, so validating the same tree
//! twice yields the same report.
//!
//! Evaluation order is fixed: individuals in ascending id order, then families
//! in ascending id order, then whole-graph checks.

pub mod family_rules;
pub mod individual_rules;
pub mod lists;
pub mod report;
pub mod structural;

use chrono::NaiveDate;
use std::time::Instant;

use crate::collections::FamilyTree;
use crate::config::RuleThresholds;
use crate::utils::logging::{log_pass_complete, log_pass_start};

pub use report::{Category, Finding, Listings, ViolationReport};

/// Everything a rule may look at
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// The tree under validation
    pub tree: &'a FamilyTree,
    /// Active thresholds
    pub thresholds: &'a RuleThresholds,
    /// The date treated as "today"
    pub reference_date: NaiveDate,
}

/// Runs every rule over a tree
#[derive(Debug, Clone)]
pub struct Validator {
    thresholds: RuleThresholds,
    reference_date: NaiveDate,
}

impl Validator {
    /// Create a validator
    #[must_use]
    pub fn new(thresholds: &RuleThresholds, reference_date: NaiveDate) -> Self {
        Self {
            thresholds: thresholds.clone(),
            reference_date,
        }
    }

    /// Validate `tree` and return the violations found
    #[must_use]
    pub fn validate(&self, tree: &FamilyTree) -> ViolationReport {
        let ctx = RuleContext {
            tree,
            thresholds: &self.thresholds,
            reference_date: self.reference_date,
        };
        let mut report = ViolationReport::new();

        let start = Instant::now();
        log_pass_start("Validating individuals", tree.individuals.len());
        report.listings = individual_rules::check_individuals(&ctx, &mut report);

        log_pass_start("Validating families", tree.families.len());
        family_rules::check_families(&ctx, &mut report);

        lists::cross_check(&ctx, &mut report);
        structural::check_structure(&ctx, &mut report);
        log_pass_complete("Validation", report.total(), Some(start.elapsed()));

        report
    }
}
