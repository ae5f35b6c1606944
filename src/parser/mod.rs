//! Document parsing
//!
//! Tokenize, classify and assemble a GEDCOM document into a [`FamilyTree`].
//! A malformed line aborts parsing; every other anomaly is kept on the tree as
//! a [`ParseIssue`].

pub mod assembler;
pub mod grammar;
pub mod tokenizer;

use serde::Serialize;
use std::fmt;

use crate::collections::FamilyTree;
use crate::error::Result;
use crate::utils::date::DateFormatConfig;

pub use assembler::Assembler;
pub use grammar::{Grammar, Line, RecordKind, Tag};
pub use tokenizer::{Level, LineToken, Tokenizer, tokenize};

/// Kind of recoverable anomaly found while assembling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IssueKind {
    /// An `INDI` or `FAM` id defined twice
    RepetitiveId,
    /// A `DATE` value that does not parse
    InvalidDate,
    /// A `DATE` with no life event to qualify
    DanglingDate,
    /// A tag not valid at its level or for its record
    UnexpectedTag,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RepetitiveId => "repeated id",
            Self::InvalidDate => "invalid date",
            Self::DanglingDate => "dangling date",
            Self::UnexpectedTag => "unexpected tag",
        };
        f.write_str(name)
    }
}

/// A recoverable anomaly, with the 1-based line it was found on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseIssue {
    /// Line number
    pub line: usize,
    /// Kind
    pub kind: IssueKind,
    /// Human readable detail
    pub detail: String,
}

/// Parse a whole document into a family tree
///
/// Parsing stops at the first blank line.
pub fn parse_document(text: &str, date_config: &DateFormatConfig) -> Result<FamilyTree> {
    let grammar = Grammar::new();
    let mut assembler = Assembler::new(date_config.clone());
    let mut lines = 0usize;

    for token in Tokenizer::new(text) {
        let token = token?;
        lines += 1;
        let line = grammar.classify(&token);
        assembler.feed(token.line, line);
    }

    let tree = assembler.finish();
    log::info!(
        "Parsed {} lines into {} individuals and {} families ({} issues)",
        lines,
        tree.individuals.len(),
        tree.families.len(),
        tree.issues.len()
    );
    Ok(tree)
}
