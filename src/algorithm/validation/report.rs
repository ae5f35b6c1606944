//! Violation report produced by one validation run

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Violation category
///
/// Variant order is the order categories are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    DateAfterCurrent,
    MarriageBeforeBirth,
    DeathBeforeBirth,
    MarriageBeforeDivorce,
    MarriageBeforeDeath,
    DivorceAfterDeath,
    AgeLessOneFifty,
    ChildBirthBeforeParentsMarriage,
    DeathBeforeBirthParents,
    MarriageBefore14,
    Bigamy,
    ParentsTooOld,
    SiblingSpacing,
    MultipleSiblings,
    SiblingGreaterThan15,
    MaleLastNames,
    DescendantChildrenMarriage,
    SiblingMarriageError,
    FirstCousinMarriage,
    AuntUncleMarriage,
    ProperGender,
    #[serde(rename = "RepetitiveID")]
    RepetitiveId,
    UniqueNameBirthDate,
    UniqueFirstNames,
    UnresolvedReference,
    DeceasedList,
    MarriedList,
    SingleList,
    InvalidDate,
    DanglingDate,
    UnexpectedTag,
}

impl Category {
    /// Every category in report order
    pub const ALL: [Self; 31] = [
        Self::DateAfterCurrent,
        Self::MarriageBeforeBirth,
        Self::DeathBeforeBirth,
        Self::MarriageBeforeDivorce,
        Self::MarriageBeforeDeath,
        Self::DivorceAfterDeath,
        Self::AgeLessOneFifty,
        Self::ChildBirthBeforeParentsMarriage,
        Self::DeathBeforeBirthParents,
        Self::MarriageBefore14,
        Self::Bigamy,
        Self::ParentsTooOld,
        Self::SiblingSpacing,
        Self::MultipleSiblings,
        Self::SiblingGreaterThan15,
        Self::MaleLastNames,
        Self::DescendantChildrenMarriage,
        Self::SiblingMarriageError,
        Self::FirstCousinMarriage,
        Self::AuntUncleMarriage,
        Self::ProperGender,
        Self::RepetitiveId,
        Self::UniqueNameBirthDate,
        Self::UniqueFirstNames,
        Self::UnresolvedReference,
        Self::DeceasedList,
        Self::MarriedList,
        Self::SingleList,
        Self::InvalidDate,
        Self::DanglingDate,
        Self::UnexpectedTag,
    ];

    /// Category name as shown in reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DateAfterCurrent => "DateAfterCurrent",
            Self::MarriageBeforeBirth => "MarriageBeforeBirth",
            Self::DeathBeforeBirth => "DeathBeforeBirth",
            Self::MarriageBeforeDivorce => "MarriageBeforeDivorce",
            Self::MarriageBeforeDeath => "MarriageBeforeDeath",
            Self::DivorceAfterDeath => "DivorceAfterDeath",
            Self::AgeLessOneFifty => "AgeLessOneFifty",
            Self::ChildBirthBeforeParentsMarriage => "ChildBirthBeforeParentsMarriage",
            Self::DeathBeforeBirthParents => "DeathBeforeBirthParents",
            Self::MarriageBefore14 => "MarriageBefore14",
            Self::Bigamy => "Bigamy",
            Self::ParentsTooOld => "ParentsTooOld",
            Self::SiblingSpacing => "SiblingSpacing",
            Self::MultipleSiblings => "MultipleSiblings",
            Self::SiblingGreaterThan15 => "SiblingGreaterThan15",
            Self::MaleLastNames => "MaleLastNames",
            Self::DescendantChildrenMarriage => "DescendantChildrenMarriage",
            Self::SiblingMarriageError => "SiblingMarriageError",
            Self::FirstCousinMarriage => "FirstCousinMarriage",
            Self::AuntUncleMarriage => "AuntUncleMarriage",
            Self::ProperGender => "ProperGender",
            Self::RepetitiveId => "RepetitiveID",
            Self::UniqueNameBirthDate => "UniqueNameBirthDate",
            Self::UniqueFirstNames => "UniqueFirstNames",
            Self::UnresolvedReference => "UnresolvedReference",
            Self::DeceasedList => "DeceasedList",
            Self::MarriedList => "MarriedList",
            Self::SingleList => "SingleList",
            Self::InvalidDate => "InvalidDate",
            Self::DanglingDate => "DanglingDate",
            Self::UnexpectedTag => "UnexpectedTag",
        }
    }

    /// User story code the rule is tracked under; parse anomalies have none
    #[must_use]
    pub const fn code(self) -> Option<&'static str> {
        let code = match self {
            Self::DateAfterCurrent => "US01",
            Self::MarriageBeforeBirth => "US02",
            Self::DeathBeforeBirth => "US03",
            Self::MarriageBeforeDivorce => "US04",
            Self::MarriageBeforeDeath => "US05",
            Self::DivorceAfterDeath => "US06",
            Self::AgeLessOneFifty => "US07",
            Self::ChildBirthBeforeParentsMarriage => "US08",
            Self::DeathBeforeBirthParents => "US09",
            Self::MarriageBefore14 => "US10",
            Self::Bigamy => "US11",
            Self::ParentsTooOld => "US12",
            Self::SiblingSpacing => "US13",
            Self::MultipleSiblings => "US14",
            Self::SiblingGreaterThan15 => "US15",
            Self::MaleLastNames => "US16",
            Self::DescendantChildrenMarriage => "US17",
            Self::SiblingMarriageError => "US18",
            Self::FirstCousinMarriage => "US19",
            Self::AuntUncleMarriage => "US20",
            Self::ProperGender => "US21",
            Self::RepetitiveId => "US22",
            Self::UniqueNameBirthDate => "US23",
            Self::UniqueFirstNames => "US25",
            Self::UnresolvedReference => "US26",
            Self::DeceasedList => "US29",
            Self::MarriedList => "US30",
            Self::SingleList => "US31",
            Self::InvalidDate => "US42",
            Self::DanglingDate | Self::UnexpectedTag => return None,
        };
        Some(code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One recorded violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Category
    pub category: Category,
    /// Id of the individual or family the violation was found on
    pub subject: String,
    /// Human readable description
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category.code() {
            Some(code) => write!(f, "ERROR: {code} {}: {}", self.subject, self.message),
            None => write!(f, "WARNING: {}: {}", self.subject, self.message),
        }
    }
}

/// Listings built during the individual pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listings {
    /// Individuals without a marriage date
    pub single: Vec<String>,
    /// Individuals with a marriage date
    pub married: Vec<String>,
    /// Individuals with a death date
    pub deceased: Vec<String>,
}

/// Result of one validation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViolationReport {
    /// Violations per category; categories without violations are absent
    pub counts: BTreeMap<Category, usize>,
    /// Every violation in evaluation order
    pub findings: Vec<Finding>,
    /// Single, married and deceased listings
    pub listings: Listings,
}

impl ViolationReport {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one violation
    pub fn record(
        &mut self,
        category: Category,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) {
        let finding = Finding {
            category,
            subject: subject.into(),
            message: message.into(),
        };
        log::debug!("{finding}");
        *self.counts.entry(category).or_insert(0) += 1;
        self.findings.push(finding);
    }

    /// Violations recorded for a category
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Violations across all categories
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Whether no violation was recorded
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.counts.is_empty()
    }

    /// Findings of one category
    pub fn findings_for(&self, category: Category) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.category == category)
    }
}
