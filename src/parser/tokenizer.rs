//! Line tokenizer
//!
//! Splits one text line into `(level, tag, value)`. Names and dates contain
//! spaces, so every token after the tag is rejoined with single spaces into the
//! value. A blank line ends the document.

use serde::Serialize;
use std::fmt;
use std::str::Lines;

use crate::error::{AuditError, Result};

/// Nesting level of a record line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Level {
    /// `0`: starts a record (or a header/trailer/note)
    Record,
    /// `1`: sets an attribute of the current record
    Attribute,
    /// `2`: qualifies the preceding level-1 attribute
    Qualifier,
}

impl Level {
    /// Parse the first token of a line
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "0" => Some(Self::Record),
            "1" => Some(Self::Attribute),
            "2" => Some(Self::Qualifier),
            _ => None,
        }
    }

    /// Numeric depth as written in the document
    #[must_use]
    pub const fn depth(self) -> u8 {
        match self {
            Self::Record => 0,
            Self::Attribute => 1,
            Self::Qualifier => 2,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.depth())
    }
}

/// One tokenized line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineToken {
    /// 1-based line number in the document
    pub line: usize,
    /// Level
    pub level: Level,
    /// Second token; the record id on `0 <id> INDI` lines
    pub tag: String,
    /// Remaining tokens joined with single spaces
    pub value: Option<String>,
}

/// Tokenize a single line
///
/// Returns `Ok(None)` for a blank line, which terminates the document.
pub fn tokenize(line: usize, raw: &str) -> Result<Option<LineToken>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut tokens = trimmed.split_whitespace();
    let invalid = || AuditError::InvalidLine {
        line,
        content: trimmed.to_string(),
    };

    let level = tokens.next().and_then(Level::parse).ok_or_else(invalid)?;
    let tag = tokens.next().ok_or_else(invalid)?.to_string();
    let rest: Vec<&str> = tokens.collect();
    let value = (!rest.is_empty()).then(|| rest.join(" "));

    Ok(Some(LineToken {
        line,
        level,
        tag,
        value,
    }))
}

/// Iterator over the tokenized lines of a document
///
/// Stops at the first blank line or at end of input. The first invalid line
/// is yielded as an error and ends iteration.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    lines: Lines<'a>,
    line: usize,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    /// Tokenize `text`
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: 0,
            done: false,
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<LineToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(raw) = self.lines.next() else {
            self.done = true;
            return None;
        };
        self.line += 1;

        match tokenize(self.line, raw) {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                log::debug!("Blank line at {}, end of document", self.line);
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
