//! Common domain type definitions
//!
//! Small enums shared by the individual and family models.

use serde::Serialize;
use std::fmt;

/// Sex of an individual as recorded by a `SEX` line
///
/// Parsing never rejects a value; anything other than `M`/`F` becomes
/// `Unknown` and is ignored by rules that need a sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Sex {
    /// `M`
    Male,
    /// `F`
    Female,
    /// Missing or unrecognized
    #[default]
    Unknown,
}

impl From<&str> for Sex {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Self::Male,
            "f" | "female" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl Sex {
    /// Whether the sex is one of the two values the rules understand
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "M"),
            Self::Female => write!(f, "F"),
            Self::Unknown => write!(f, "NA"),
        }
    }
}

/// Life events whose date arrives on a following level-2 `DATE` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LifeEvent {
    /// `BIRT`
    Birth,
    /// `DEAT`
    Death,
    /// `MARR`
    Marriage,
    /// `DIV`
    Divorce,
}

impl fmt::Display for LifeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Birth => "BIRT",
            Self::Death => "DEAT",
            Self::Marriage => "MARR",
            Self::Divorce => "DIV",
        };
        write!(f, "{name}")
    }
}
