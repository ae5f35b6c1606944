//! Family unit representation
//!
//! A Family links a husband id, a wife id and an ordered list of child ids. It
//! deliberately carries no marriage or divorce dates: those are attached to the
//! spouses' [`Individual`](crate::models::Individual) records and looked up
//! through [`FamilyTree::marriage_date`](crate::collections::FamilyTree::marriage_date).

use serde::Serialize;

use crate::models::traits::EntityModel;

/// Representation of a family unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Family {
    /// Record id, e.g. `@F1@`
    pub id: String,
    /// Husband id (`HUSB`)
    pub husband: Option<String>,
    /// Wife id (`WIFE`)
    pub wife: Option<String>,
    /// Child ids in `CHIL` line order
    pub children: Vec<String>,
}

impl Family {
    /// Create a new family with only an id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the husband for this family
    #[must_use]
    pub fn with_husband(mut self, husband: impl Into<String>) -> Self {
        self.husband = Some(husband.into());
        self
    }

    /// Set the wife for this family
    #[must_use]
    pub fn with_wife(mut self, wife: impl Into<String>) -> Self {
        self.wife = Some(wife.into());
        self
    }

    /// Add a child to this family
    pub fn add_child(&mut self, child: impl Into<String>) {
        self.children.push(child.into());
    }

    /// Get number of children in the family
    #[must_use]
    pub fn family_size(&self) -> usize {
        self.children.len()
    }

    /// The spouse ids that are present, husband first
    pub fn spouses(&self) -> impl Iterator<Item = &str> {
        self.husband.as_deref().into_iter().chain(self.wife.as_deref())
    }

    /// The other spouse of `member`, if `member` is a spouse here
    #[must_use]
    pub fn other_spouse(&self, member: &str) -> Option<&str> {
        if self.husband.as_deref() == Some(member) {
            self.wife.as_deref()
        } else if self.wife.as_deref() == Some(member) {
            self.husband.as_deref()
        } else {
            None
        }
    }
}

impl EntityModel for Family {
    fn id(&self) -> &str {
        &self.id
    }
}
