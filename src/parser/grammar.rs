//! Record grammar
//!
//! The tag vocabulary is fixed per level. Classification turns a tokenized
//! line into a closed [`Line`] sum type so the assembler can match on it
//! exhaustively.

use serde::Serialize;
use std::fmt;

use super::tokenizer::{Level, LineToken};

/// Every tag the grammar knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tag {
    /// Individual record
    Indi,
    /// Family record
    Fam,
    /// Header
    Head,
    /// Trailer
    Trlr,
    /// Note
    Note,
    /// Name
    Name,
    /// Sex
    Sex,
    /// Birth event
    Birt,
    /// Death event
    Deat,
    /// Family as child
    Famc,
    /// Family as spouse
    Fams,
    /// Marriage event
    Marr,
    /// Husband
    Husb,
    /// Wife
    Wife,
    /// Child
    Chil,
    /// Divorce event
    Div,
    /// Date qualifier
    Date,
}

impl Tag {
    /// Parse a tag name; tags are upper case in the document
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let tag = match s {
            "INDI" => Self::Indi,
            "FAM" => Self::Fam,
            "HEAD" => Self::Head,
            "TRLR" => Self::Trlr,
            "NOTE" => Self::Note,
            "NAME" => Self::Name,
            "SEX" => Self::Sex,
            "BIRT" => Self::Birt,
            "DEAT" => Self::Deat,
            "FAMC" => Self::Famc,
            "FAMS" => Self::Fams,
            "MARR" => Self::Marr,
            "HUSB" => Self::Husb,
            "WIFE" => Self::Wife,
            "CHIL" => Self::Chil,
            "DIV" => Self::Div,
            "DATE" => Self::Date,
            _ => return None,
        };
        Some(tag)
    }

    /// Tag name as written in the document
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indi => "INDI",
            Self::Fam => "FAM",
            Self::Head => "HEAD",
            Self::Trlr => "TRLR",
            Self::Note => "NOTE",
            Self::Name => "NAME",
            Self::Sex => "SEX",
            Self::Birt => "BIRT",
            Self::Deat => "DEAT",
            Self::Famc => "FAMC",
            Self::Fams => "FAMS",
            Self::Marr => "MARR",
            Self::Husb => "HUSB",
            Self::Wife => "WIFE",
            Self::Chil => "CHIL",
            Self::Div => "DIV",
            Self::Date => "DATE",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of record opened by a level-0 line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecordKind {
    /// `0 <id> INDI`
    Individual,
    /// `0 <id> FAM`
    Family,
}

/// A classified line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Starts an individual or family record
    Open {
        /// Record kind
        kind: RecordKind,
        /// Record id
        id: String,
    },
    /// A level-0 header, trailer or note
    Marker(Tag),
    /// A known level-1 attribute
    Attribute {
        /// Tag
        tag: Tag,
        /// Value, if any
        value: Option<String>,
    },
    /// An unknown level-1 tag, tolerated as a free-form sub-tag
    Custom {
        /// Raw tag
        tag: String,
        /// Value, if any
        value: Option<String>,
    },
    /// A level-2 `DATE` with its value
    Date(String),
    /// A line not legal at its level
    Unexpected {
        /// Level of the line
        level: Level,
        /// Raw tag
        tag: String,
    },
}

const LEVEL_0: &[Tag] = &[Tag::Indi, Tag::Head, Tag::Trlr, Tag::Note, Tag::Fam];
const LEVEL_1: &[Tag] = &[
    Tag::Name,
    Tag::Sex,
    Tag::Birt,
    Tag::Deat,
    Tag::Famc,
    Tag::Fams,
    Tag::Marr,
    Tag::Husb,
    Tag::Wife,
    Tag::Chil,
    Tag::Div,
    Tag::Note,
];
const LEVEL_2: &[Tag] = &[Tag::Date];

/// Per-level tag vocabulary
#[derive(Debug, Clone, Copy, Default)]
pub struct Grammar;

impl Grammar {
    /// Create the grammar
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Tags legal at a level
    #[must_use]
    pub const fn vocabulary(level: Level) -> &'static [Tag] {
        match level {
            Level::Record => LEVEL_0,
            Level::Attribute => LEVEL_1,
            Level::Qualifier => LEVEL_2,
        }
    }

    /// Whether `tag` is legal at `level`
    #[must_use]
    pub fn allows(level: Level, tag: Tag) -> bool {
        Self::vocabulary(level).contains(&tag)
    }

    /// Classify a tokenized line
    #[must_use]
    pub fn classify(&self, token: &LineToken) -> Line {
        match token.level {
            Level::Record => Self::classify_record(token),
            Level::Attribute => match Tag::parse(&token.tag) {
                Some(tag) if Self::allows(Level::Attribute, tag) => Line::Attribute {
                    tag,
                    value: token.value.clone(),
                },
                _ => Line::Custom {
                    tag: token.tag.clone(),
                    value: token.value.clone(),
                },
            },
            Level::Qualifier => match (Tag::parse(&token.tag), &token.value) {
                (Some(Tag::Date), Some(value)) => Line::Date(value.clone()),
                _ => Line::Unexpected {
                    level: Level::Qualifier,
                    tag: token.tag.clone(),
                },
            },
        }
    }

    /// Level 0 is either `0 <id> INDI|FAM|NOTE` or `0 HEAD|TRLR|NOTE ...`
    fn classify_record(token: &LineToken) -> Line {
        let record_tag = token
            .value
            .as_deref()
            .and_then(|v| v.split_whitespace().next())
            .and_then(Tag::parse)
            .filter(|tag| Self::allows(Level::Record, *tag));

        match (record_tag, token.value.as_deref()) {
            (Some(Tag::Indi), Some("INDI")) => Line::Open {
                kind: RecordKind::Individual,
                id: token.tag.clone(),
            },
            (Some(Tag::Fam), Some("FAM")) => Line::Open {
                kind: RecordKind::Family,
                id: token.tag.clone(),
            },
            (Some(tag @ (Tag::Note | Tag::Head | Tag::Trlr)), _) => Line::Marker(tag),
            _ => match Tag::parse(&token.tag) {
                Some(tag @ (Tag::Head | Tag::Trlr | Tag::Note)) => Line::Marker(tag),
                _ => Line::Unexpected {
                    level: Level::Record,
                    tag: token.tag.clone(),
                },
            },
        }
    }
}
