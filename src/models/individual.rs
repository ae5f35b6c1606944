//! Individual entity model
//!
//! An Individual is one `0 <id> INDI` record. Parsed fields are filled by the
//! assembler; the derived block (age, alive, spouse, children, parents) is
//! owned by the relationship resolver and recomputed from scratch on every
//! resolve.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use smallvec::SmallVec;

use crate::models::traits::EntityModel;
use crate::models::types::Sex;

/// One marriage an individual is or was a spouse in
///
/// Marriage and divorce dates live on the spouses, not on the family record.
/// `family` is the family id when the date came from a `FAM` record and
/// `None` when it came from a `MARR`/`DIV` line on the individual itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarriageRecord {
    /// Family this marriage belongs to, if known
    pub family: Option<String>,
    /// Marriage date
    pub married: Option<NaiveDate>,
    /// Divorce date
    pub divorced: Option<NaiveDate>,
    /// Recorded while an earlier marriage had no divorce date
    pub overlapping: bool,
}

/// Core Individual entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Individual {
    /// Record id, e.g. `@I1@`
    pub id: String,
    /// Raw name, conventionally `Given /Surname/`
    pub name: Option<String>,
    /// Sex
    pub sex: Sex,
    /// Birth date
    pub birth_date: Option<NaiveDate>,
    /// Death date; absence means alive
    pub death_date: Option<NaiveDate>,
    /// Marriages in the order their dates were recorded
    pub marriages: Vec<MarriageRecord>,
    /// Families this individual is a spouse in (`FAMS`)
    pub spouse_families: SmallVec<[String; 2]>,
    /// Family this individual is a child in (`FAMC`)
    pub child_family: Option<String>,

    // Derived by the resolver
    /// Age in years (year-only subtraction)
    pub age: Option<i32>,
    /// Whether no death date is recorded
    pub alive: bool,
    /// Other member of the most recent spouse family
    pub spouse: Option<String>,
    /// Children of every spouse family, in document order
    pub children: Vec<String>,
    /// Husband of the child family, when recorded as male
    pub father: Option<String>,
    /// Wife of the child family, when recorded as female
    pub mother: Option<String>,
}

impl Individual {
    /// Create a new Individual with only an id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            alive: true,
            ..Self::default()
        }
    }

    /// First word of the given-name part of `name`
    #[must_use]
    pub fn given_name(&self) -> Option<&str> {
        let name = self.name.as_deref()?;
        let given = name.split('/').next().unwrap_or_default();
        given.split_whitespace().next()
    }

    /// Surname between the slashes, or the last word when there are none
    #[must_use]
    pub fn surname(&self) -> Option<&str> {
        let name = self.name.as_deref()?;
        if name.contains('/') {
            let surname = name.split('/').nth(1).unwrap_or_default().trim();
            return (!surname.is_empty()).then_some(surname);
        }

        let words: Vec<&str> = name.split_whitespace().collect();
        match words.as_slice() {
            [_, .., last] => Some(*last),
            _ => None,
        }
    }

    /// Year-only age against `reference_date`, or against the death date if dead
    #[must_use]
    pub fn age_at(&self, reference_date: &NaiveDate) -> Option<i32> {
        let birth = self.birth_date?;
        let reference_year = self.death_date.map_or(reference_date.year(), |d| d.year());
        Some(reference_year - birth.year())
    }

    /// Whether any marriage date is recorded
    #[must_use]
    pub fn is_married(&self) -> bool {
        self.marriages.iter().any(|m| m.married.is_some())
    }

    /// Whether a death date is recorded
    #[must_use]
    pub const fn is_deceased(&self) -> bool {
        self.death_date.is_some()
    }

    /// Marriage record for a family
    #[must_use]
    pub fn marriage_for(&self, family_id: &str) -> Option<&MarriageRecord> {
        self.marriages
            .iter()
            .find(|m| m.family.as_deref() == Some(family_id))
    }

    /// All recorded marriage dates
    pub fn marriage_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.marriages.iter().filter_map(|m| m.married)
    }

    /// All recorded divorce dates
    pub fn divorce_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.marriages.iter().filter_map(|m| m.divorced)
    }

    /// Earliest recorded marriage date
    #[must_use]
    pub fn earliest_marriage_date(&self) -> Option<NaiveDate> {
        self.marriage_dates().min()
    }

    /// Marriages recorded on the individual itself, not tied to a family
    fn unattached(&self) -> impl Iterator<Item = &MarriageRecord> + '_ {
        self.marriages.iter().filter(|m| m.family.is_none())
    }

    /// Latest marriage date from a `MARR` on the individual record
    #[must_use]
    pub fn unattached_marriage_date(&self) -> Option<NaiveDate> {
        self.unattached().filter_map(|m| m.married).max()
    }

    /// Latest divorce date from a `DIV` on the individual record
    #[must_use]
    pub fn unattached_divorce_date(&self) -> Option<NaiveDate> {
        self.unattached().filter_map(|m| m.divorced).max()
    }

    /// Record a marriage date
    ///
    /// A date for a family that already has a record updates it; otherwise a new
    /// record is appended. Returns whether the marriage overlaps an earlier
    /// marriage that has no divorce date.
    pub fn record_marriage(&mut self, family: Option<&str>, date: NaiveDate) -> bool {
        let existing = family.and_then(|f| {
            self.marriages
                .iter()
                .position(|m| m.family.as_deref() == Some(f))
        });

        let overlapping = self.marriages.iter().enumerate().any(|(idx, m)| {
            Some(idx) != existing && m.married.is_some() && m.divorced.is_none()
        });

        match existing {
            Some(idx) => {
                let record = &mut self.marriages[idx];
                record.married = Some(date);
                record.overlapping = overlapping;
            }
            None => self.marriages.push(MarriageRecord {
                family: family.map(str::to_string),
                married: Some(date),
                divorced: None,
                overlapping,
            }),
        }

        overlapping
    }

    /// Record a divorce date
    ///
    /// Without a family id the divorce closes the most recent open marriage.
    pub fn record_divorce(&mut self, family: Option<&str>, date: NaiveDate) {
        let target = match family {
            Some(f) => self
                .marriages
                .iter()
                .position(|m| m.family.as_deref() == Some(f)),
            None => self.marriages.iter().rposition(|m| m.divorced.is_none()),
        };

        match target {
            Some(idx) => self.marriages[idx].divorced = Some(date),
            None => self.marriages.push(MarriageRecord {
                family: family.map(str::to_string),
                married: None,
                divorced: Some(date),
                overlapping: false,
            }),
        }
    }

    /// Reset every resolver-owned field
    pub fn clear_derived(&mut self) {
        self.age = None;
        self.alive = true;
        self.spouse = None;
        self.children.clear();
        self.father = None;
        self.mother = None;
    }
}

impl EntityModel for Individual {
    fn id(&self) -> &str {
        &self.id
    }
}
