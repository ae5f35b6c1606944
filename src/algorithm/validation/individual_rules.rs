//! Rules evaluated once per individual

use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHashSet;

use super::RuleContext;
use super::report::{Category, Listings, ViolationReport};
use crate::models::Individual;

/// Check every individual in ascending id order
///
/// Returns the single, married and deceased listings built along the way.
pub fn check_individuals(ctx: &RuleContext<'_>, report: &mut ViolationReport) -> Listings {
    let mut listings = Listings::default();
    let mut seen_name_birth: FxHashSet<(&str, NaiveDate)> = FxHashSet::default();

    for individual in ctx.tree.individuals.iter_sorted() {
        dates_after_current(ctx, individual, report);
        death_before_birth(individual, report);
        bigamy(individual, report);
        marriage_before_min_age(ctx, individual, report);
        marriage_before_death(individual, report);
        age_over_limit(ctx, individual, report);
        marriage_before_birth(individual, report);

        if let (Some(name), Some(birth)) = (individual.name.as_deref(), individual.birth_date) {
            if !seen_name_birth.insert((name, birth)) {
                report.record(
                    Category::UniqueNameBirthDate,
                    &individual.id,
                    format!("{name} born {birth} is not unique"),
                );
            }
        }

        if individual.is_married() {
            listings.married.push(individual.id.clone());
        } else {
            listings.single.push(individual.id.clone());
        }
        if individual.is_deceased() {
            listings.deceased.push(individual.id.clone());
        }
    }

    listings
}

fn dates_after_current(ctx: &RuleContext<'_>, individual: &Individual, report: &mut ViolationReport) {
    let labelled = individual
        .birth_date
        .map(|d| ("birth", d))
        .into_iter()
        .chain(individual.death_date.map(|d| ("death", d)))
        .chain(individual.marriage_dates().map(|d| ("marriage", d)))
        .chain(individual.divorce_dates().map(|d| ("divorce", d)));

    for (label, date) in labelled {
        if date > ctx.reference_date {
            report.record(
                Category::DateAfterCurrent,
                &individual.id,
                format!("{label} date {date} is after {}", ctx.reference_date),
            );
        }
    }
}

fn death_before_birth(individual: &Individual, report: &mut ViolationReport) {
    if let (Some(birth), Some(death)) = (individual.birth_date, individual.death_date) {
        if death < birth {
            report.record(
                Category::DeathBeforeBirth,
                &individual.id,
                format!("died {death} before birth {birth}"),
            );
        }
    }
}

fn bigamy(individual: &Individual, report: &mut ViolationReport) {
    for marriage in individual.marriages.iter().filter(|m| m.overlapping) {
        let when = marriage
            .married
            .map_or_else(|| "unknown date".to_string(), |d| d.to_string());
        report.record(
            Category::Bigamy,
            &individual.id,
            format!("married on {when} while an earlier marriage was not dissolved"),
        );
    }
}

fn marriage_before_min_age(
    ctx: &RuleContext<'_>,
    individual: &Individual,
    report: &mut ViolationReport,
) {
    let (Some(birth), Some(married)) = (individual.birth_date, individual.earliest_marriage_date())
    else {
        return;
    };

    let age = married.year() - birth.year();
    if age < ctx.thresholds.min_marriage_age {
        report.record(
            Category::MarriageBefore14,
            &individual.id,
            format!("married at age {age}"),
        );
    }
}

fn marriage_before_death(individual: &Individual, report: &mut ViolationReport) {
    let Some(death) = individual.death_date else {
        return;
    };
    for married in individual.marriage_dates().filter(|d| *d > death) {
        report.record(
            Category::MarriageBeforeDeath,
            &individual.id,
            format!("married {married} after death on {death}"),
        );
    }
}

fn age_over_limit(ctx: &RuleContext<'_>, individual: &Individual, report: &mut ViolationReport) {
    if individual.is_deceased() {
        return;
    }
    if let Some(age) = individual.age_at(&ctx.reference_date) {
        if age > ctx.thresholds.max_age {
            report.record(
                Category::AgeLessOneFifty,
                &individual.id,
                format!("living individual aged {age}"),
            );
        }
    }
}

fn marriage_before_birth(individual: &Individual, report: &mut ViolationReport) {
    let Some(birth) = individual.birth_date else {
        return;
    };
    for married in individual.marriage_dates().filter(|d| *d < birth) {
        report.record(
            Category::MarriageBeforeBirth,
            &individual.id,
            format!("married {married} before birth on {birth}"),
        );
    }
}
