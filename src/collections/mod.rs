//! Entity tables for the family graph
//!
//! Individuals and families reference each other only by id. The graph is two
//! flat tables keyed by id; every cross-reference is a table lookup with an
//! explicit "not found" case, so there are no ownership cycles between a
//! spouse's `FAMS` and the family's `HUSB`/`WIFE`/`CHIL`.

use chrono::NaiveDate;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};

use crate::models::{EntityModel, Family, Individual};
use crate::parser::ParseIssue;

/// Generic id-keyed table
///
/// Rows are stored in a hash map for lookups; deterministic passes go through
/// [`Table::iter_sorted`].
#[derive(Debug, Clone)]
pub struct Table<T: EntityModel> {
    /// Models indexed by ID
    items: FxHashMap<String, T>,
}

impl<T: EntityModel> Table<T> {
    /// Create a new empty table
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: FxHashMap::default(),
        }
    }

    /// Create a table from a vector of models; later duplicates win
    #[must_use]
    pub fn from_models(models: Vec<T>) -> Self {
        let mut table = Self::new();
        for model in models {
            table.insert(model);
        }
        table
    }

    /// Insert a model, returning the row it replaced
    pub fn insert(&mut self, model: T) -> Option<T> {
        self.items.insert(model.id().to_string(), model)
    }

    /// Get a model by its id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    /// Get a mutable model by its id
    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.get_mut(id)
    }

    /// Check if the table contains a model with the given id
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All ids in ascending order
    #[must_use]
    pub fn ids_sorted(&self) -> Vec<String> {
        self.items.keys().sorted().cloned().collect()
    }

    /// All rows in ascending id order
    pub fn iter_sorted(&self) -> impl Iterator<Item = &T> {
        self.items
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, model)| model)
    }

    /// All rows in arbitrary order, mutably
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.values_mut()
    }

    /// Rows matching a predicate, in ascending id order
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter_sorted().filter(|model| predicate(model)).collect()
    }
}

impl<T: EntityModel> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EntityModel + PartialEq> PartialEq for Table<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: EntityModel + Serialize> Serialize for Table<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_sorted())
    }
}

/// The assembled family graph
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FamilyTree {
    /// Individuals table
    pub individuals: Table<Individual>,
    /// Families table
    pub families: Table<Family>,
    /// Recoverable anomalies found while assembling the tables
    pub issues: Vec<ParseIssue>,
}

impl FamilyTree {
    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an individual
    #[must_use]
    pub fn individual(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Look up a family
    #[must_use]
    pub fn family(&self, id: &str) -> Option<&Family> {
        self.families.get(id)
    }

    /// The family's husband, when recorded and present
    #[must_use]
    pub fn husband(&self, family: &Family) -> Option<&Individual> {
        family.husband.as_deref().and_then(|id| self.individual(id))
    }

    /// The family's wife, when recorded and present
    #[must_use]
    pub fn wife(&self, family: &Family) -> Option<&Individual> {
        family.wife.as_deref().and_then(|id| self.individual(id))
    }

    /// The family's children that are present in the individuals table
    pub fn children<'a>(&'a self, family: &'a Family) -> impl Iterator<Item = &'a Individual> + 'a {
        family
            .children
            .iter()
            .filter_map(|id| self.individual(id))
    }

    /// The family's effective marriage date
    ///
    /// Families do not store dates; the date is read from the husband's
    /// marriage record for this family. Dates from other families never apply;
    /// only a `MARR` on the husband's own record is used as a fallback.
    #[must_use]
    pub fn marriage_date(&self, family: &Family) -> Option<NaiveDate> {
        let husband = self.husband(family)?;
        self.spouse_marriage_date(family, husband)
    }

    /// A spouse's marriage date for this family
    #[must_use]
    pub fn spouse_marriage_date(&self, family: &Family, spouse: &Individual) -> Option<NaiveDate> {
        spouse
            .marriage_for(&family.id)
            .and_then(|m| m.married)
            .or_else(|| spouse.unattached_marriage_date())
    }

    /// A spouse's divorce date for this family
    #[must_use]
    pub fn divorce_date(&self, family: &Family, spouse: &Individual) -> Option<NaiveDate> {
        spouse
            .marriage_for(&family.id)
            .and_then(|m| m.divorced)
            .or_else(|| spouse.unattached_divorce_date())
    }

    /// Total number of entities in both tables
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.individuals.len() + self.families.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted_iteration() {
        let table = Table::from_models(vec![
            Individual::new("@I3@"),
            Individual::new("@I1@"),
            Individual::new("@I2@"),
        ]);
        let ids: Vec<&str> = table.iter_sorted().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["@I1@", "@I2@", "@I3@"]);
        assert_eq!(table.ids_sorted(), vec!["@I1@", "@I2@", "@I3@"]);
    }

    #[test]
    fn test_insert_reports_replaced_row() {
        let mut table = Table::new();
        assert!(table.insert(Family::new("@F1@")).is_none());
        assert!(table.insert(Family::new("@F1@")).is_some());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_marriage_date_indirects_through_husband() {
        let married = NaiveDate::from_ymd_opt(1970, 6, 1).unwrap();
        let mut husband = Individual::new("@I1@");
        husband.record_marriage(Some("@F1@"), married);

        let mut tree = FamilyTree::new();
        tree.individuals.insert(husband);
        tree.individuals.insert(Individual::new("@I2@"));
        tree.families
            .insert(Family::new("@F1@").with_husband("@I1@").with_wife("@I2@"));

        let family = tree.family("@F1@").unwrap();
        assert_eq!(tree.marriage_date(family), Some(married));
    }

    #[test]
    fn test_marriage_date_ignores_other_families() {
        let mut husband = Individual::new("@H@");
        husband.record_marriage(Some("@F2@"), NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());

        let mut tree = FamilyTree::new();
        tree.individuals.insert(husband);
        tree.families.insert(Family::new("@F1@").with_husband("@H@"));
        tree.families.insert(Family::new("@F2@").with_husband("@H@"));

        let first = tree.family("@F1@").unwrap();
        assert_eq!(tree.marriage_date(first), None);
        let second = tree.family("@F2@").unwrap();
        assert!(tree.marriage_date(second).is_some());
    }

    #[test]
    fn test_marriage_date_without_husband() {
        let mut tree = FamilyTree::new();
        tree.families.insert(Family::new("@F1@").with_wife("@I2@"));
        let family = tree.family("@F1@").unwrap();
        assert_eq!(tree.marriage_date(family), None);
    }
}
