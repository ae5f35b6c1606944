//! Configuration for an audit run.

use std::fmt;

use chrono::NaiveDate;

use crate::error::{AuditError, Result};
use crate::utils::date::DateFormatConfig;

/// Thresholds used by the validation rules
///
/// A single consistent ruleset. The defaults are the limits the rule catalogue
/// is documented with; callers may tighten or relax them but never mix rule
/// variants within one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleThresholds {
    /// Families with more children than this are flagged
    pub max_siblings: usize,
    /// Non-twin siblings born closer than this many days are flagged
    pub sibling_spacing_days: i64,
    /// Siblings born closer than this many days count as a multiple birth
    pub multiple_birth_window_days: i64,
    /// Families with more multiple-birth sibling pairs than this are flagged
    pub max_multiple_birth_pairs: usize,
    /// Maximum gap between the spouses' birth dates, in days
    pub max_spouse_birth_gap_days: i64,
    /// Maximum gap between a father's and a child's birth dates, in days
    pub max_father_age_gap_days: i64,
    /// Maximum gap between a mother's and a child's birth dates, in days
    pub max_mother_age_gap_days: i64,
    /// Minimum age in years at first marriage
    pub min_marriage_age: i32,
    /// Maximum age in years for a living individual
    pub max_age: i32,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            max_siblings: 15,
            sibling_spacing_days: 250,
            multiple_birth_window_days: 2,
            max_multiple_birth_pairs: 5,
            max_spouse_birth_gap_days: 5475,
            max_father_age_gap_days: 29200,
            max_mother_age_gap_days: 21900,
            min_marriage_age: 14,
            max_age: 150,
        }
    }
}

/// Configuration for the auditor
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Date treated as "today"; `None` uses the local wall-clock date
    pub reference_date: Option<NaiveDate>,
    /// Date format configuration for DATE values
    pub date_format_config: DateFormatConfig,
    /// Rule thresholds
    pub thresholds: RuleThresholds,
    /// Whether the entity tables should be rendered
    pub render_tables: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            reference_date: None,
            date_format_config: DateFormatConfig::default(),
            thresholds: RuleThresholds::default(),
            render_tables: true,
        }
    }
}

impl AuditConfig {
    /// Pin the reference date, making age and "future date" checks reproducible
    #[must_use]
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Replace the rule thresholds
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: RuleThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// The date rules compare against
    #[must_use]
    pub fn effective_reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Reject settings that cannot produce a meaningful audit
    pub fn validate(&self) -> Result<()> {
        if self.date_format_config.date_formats.is_empty()
            && !self.date_format_config.enable_format_detection
        {
            return Err(AuditError::InvalidConfig(
                "at least one date format is required when format detection is off".to_string(),
            ));
        }

        let t = &self.thresholds;
        if t.multiple_birth_window_days < 0 || t.sibling_spacing_days < t.multiple_birth_window_days
        {
            return Err(AuditError::InvalidConfig(format!(
                "sibling spacing ({} days) must not be shorter than the multiple birth window ({} days)",
                t.sibling_spacing_days, t.multiple_birth_window_days
            )));
        }

        Ok(())
    }
}

impl fmt::Display for AuditConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Audit Configuration:")?;
        match self.reference_date {
            Some(date) => writeln!(f, "  Reference Date: {date}")?,
            None => writeln!(f, "  Reference Date: today")?,
        }
        writeln!(
            f,
            "  Date Formats: {}",
            self.date_format_config.date_formats.join(", ")
        )?;
        writeln!(f, "  Max Siblings: {}", self.thresholds.max_siblings)?;
        writeln!(
            f,
            "  Sibling Spacing: {} days",
            self.thresholds.sibling_spacing_days
        )?;
        writeln!(f, "  Render Tables: {}", self.render_tables)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AuditConfig::default().validate().is_ok());
    }

    #[test]
    fn test_spacing_shorter_than_twin_window_is_rejected() {
        let config = AuditConfig::default().with_thresholds(RuleThresholds {
            sibling_spacing_days: 1,
            ..RuleThresholds::default()
        });
        assert!(matches!(
            config.validate(),
            Err(AuditError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_pinned_reference_date() {
        let date = NaiveDate::from_ymd_opt(2020, 5, 17).unwrap();
        let config = AuditConfig::default().with_reference_date(date);
        assert_eq!(config.effective_reference_date(), date);
    }
}
