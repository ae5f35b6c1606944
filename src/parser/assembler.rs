//! Entity assembler
//!
//! Consumes classified lines in document order and builds the individuals and
//! families tables. Level-2 dates qualify the most recent level-1 attribute, so
//! the assembler carries an explicit cursor plus a pending tag, and resets the
//! pending tag every time the cursor moves.

use chrono::NaiveDate;

use super::grammar::{Line, RecordKind, Tag};
use super::tokenizer::Level;
use super::{IssueKind, ParseIssue};
use crate::collections::FamilyTree;
use crate::models::{Family, Individual, LifeEvent, Sex};
use crate::utils::date::{DateFormatConfig, parse_date_string};

/// The record that subsequent level-1 and level-2 lines belong to
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    /// Header, trailer, note, an unsupported record, or nothing opened yet
    Detached,
    Individual(String),
    Family(String),
}

/// The level-1 attribute a following `DATE` would qualify
#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingTag {
    Empty,
    Event(LifeEvent),
    Other(String),
}

/// Builds a [`FamilyTree`] from classified lines
#[derive(Debug)]
pub struct Assembler {
    tree: FamilyTree,
    cursor: Cursor,
    pending: PendingTag,
    date_config: DateFormatConfig,
}

impl Assembler {
    /// Create an assembler with an empty tree
    #[must_use]
    pub fn new(date_config: DateFormatConfig) -> Self {
        Self {
            tree: FamilyTree::new(),
            cursor: Cursor::Detached,
            pending: PendingTag::Empty,
            date_config,
        }
    }

    /// Feed one classified line
    pub fn feed(&mut self, line_no: usize, line: Line) {
        match line {
            Line::Open { kind, id } => self.open(line_no, kind, id),
            Line::Marker(tag) => {
                log::trace!("Line {line_no}: {tag} detaches the current record");
                self.move_cursor(Cursor::Detached);
            }
            Line::Attribute { tag, value } => self.attribute(line_no, tag, value),
            Line::Custom { tag, .. } => {
                if self.cursor != Cursor::Detached {
                    log::debug!("Line {line_no}: keeping unknown tag {tag} as pending");
                }
                self.pending = PendingTag::Other(tag);
            }
            Line::Date(value) => self.date(line_no, &value),
            Line::Unexpected { level, tag } => {
                if level != Level::Record && self.cursor == Cursor::Detached {
                    log::trace!("Line {line_no}: ignoring {tag} outside a record");
                    return;
                }
                if level == Level::Record {
                    self.move_cursor(Cursor::Detached);
                }
                self.issue(
                    line_no,
                    IssueKind::UnexpectedTag,
                    format!("tag {tag} is not valid on level {level}"),
                );
            }
        }
    }

    /// Hand over the assembled tree
    #[must_use]
    pub fn finish(self) -> FamilyTree {
        self.tree
    }

    fn move_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.pending = PendingTag::Empty;
    }

    fn open(&mut self, line_no: usize, kind: RecordKind, id: String) {
        let repeated = match kind {
            RecordKind::Individual => self.tree.individuals.insert(Individual::new(&id)).is_some(),
            RecordKind::Family => self.tree.families.insert(Family::new(&id)).is_some(),
        };

        if repeated {
            self.issue(
                line_no,
                IssueKind::RepetitiveId,
                format!("{id} is already defined"),
            );
        }

        let cursor = match kind {
            RecordKind::Individual => Cursor::Individual(id),
            RecordKind::Family => Cursor::Family(id),
        };
        self.move_cursor(cursor);
    }

    fn attribute(&mut self, line_no: usize, tag: Tag, value: Option<String>) {
        self.pending = match tag {
            Tag::Birt => PendingTag::Event(LifeEvent::Birth),
            Tag::Deat => PendingTag::Event(LifeEvent::Death),
            Tag::Marr => PendingTag::Event(LifeEvent::Marriage),
            Tag::Div => PendingTag::Event(LifeEvent::Divorce),
            other => PendingTag::Other(other.as_str().to_string()),
        };

        match (self.cursor.clone(), tag) {
            (Cursor::Detached, _) | (_, Tag::Note | Tag::Marr | Tag::Div) => {}
            (Cursor::Individual(_), Tag::Birt | Tag::Deat) => {}
            (Cursor::Individual(id), Tag::Name | Tag::Sex | Tag::Famc | Tag::Fams) => {
                self.individual_field(line_no, &id, tag, value);
            }
            (Cursor::Family(id), Tag::Husb | Tag::Wife | Tag::Chil) => {
                self.family_field(line_no, &id, tag, value);
            }
            (Cursor::Individual(record) | Cursor::Family(record), tag) => {
                self.pending = PendingTag::Other(tag.as_str().to_string());
                self.issue(
                    line_no,
                    IssueKind::UnexpectedTag,
                    format!("tag {tag} does not belong to record {record}"),
                );
            }
        }
    }

    fn individual_field(&mut self, line_no: usize, id: &str, tag: Tag, value: Option<String>) {
        let Some(value) = value else {
            self.issue(
                line_no,
                IssueKind::UnexpectedTag,
                format!("{tag} on {id} has no value"),
            );
            return;
        };
        let Some(individual) = self.tree.individuals.get_mut(id) else {
            return;
        };

        match tag {
            Tag::Name => individual.name = Some(value),
            Tag::Sex => individual.sex = Sex::from(value.as_str()),
            Tag::Famc => individual.child_family = Some(value),
            Tag::Fams => individual.spouse_families.push(value),
            _ => {}
        }
    }

    fn family_field(&mut self, line_no: usize, id: &str, tag: Tag, value: Option<String>) {
        let Some(value) = value else {
            self.issue(
                line_no,
                IssueKind::UnexpectedTag,
                format!("{tag} on {id} has no value"),
            );
            return;
        };
        let Some(family) = self.tree.families.get_mut(id) else {
            return;
        };

        match tag {
            Tag::Husb => family.husband = Some(value),
            Tag::Wife => family.wife = Some(value),
            Tag::Chil => family.add_child(value),
            _ => {}
        }
    }

    fn date(&mut self, line_no: usize, value: &str) {
        if self.cursor == Cursor::Detached {
            return;
        }

        let event = match self.pending.clone() {
            PendingTag::Event(event) => event,
            PendingTag::Empty => {
                self.issue(
                    line_no,
                    IssueKind::DanglingDate,
                    format!("DATE {value} has no attribute to qualify"),
                );
                return;
            }
            PendingTag::Other(tag) => {
                self.issue(
                    line_no,
                    IssueKind::DanglingDate,
                    format!("DATE {value} qualifies {tag}, which takes no date"),
                );
                return;
            }
        };

        let Some(date) = parse_date_string(value, &self.date_config) else {
            self.issue(
                line_no,
                IssueKind::InvalidDate,
                format!("cannot parse {event} date '{value}'"),
            );
            return;
        };

        match self.cursor.clone() {
            Cursor::Individual(id) => self.individual_date(&id, event, date),
            Cursor::Family(id) => self.family_date(line_no, &id, event, date),
            Cursor::Detached => {}
        }
    }

    fn individual_date(&mut self, id: &str, event: LifeEvent, date: NaiveDate) {
        let Some(individual) = self.tree.individuals.get_mut(id) else {
            return;
        };

        match event {
            LifeEvent::Birth => individual.birth_date = Some(date),
            LifeEvent::Death => individual.death_date = Some(date),
            LifeEvent::Marriage => {
                if individual.record_marriage(None, date) {
                    log::debug!("{id} marries on {date} while an earlier marriage is open");
                }
            }
            LifeEvent::Divorce => individual.record_divorce(None, date),
        }
    }

    fn family_date(&mut self, line_no: usize, id: &str, event: LifeEvent, date: NaiveDate) {
        let spouses: Vec<String> = self
            .tree
            .family(id)
            .map(|f| f.spouses().map(str::to_string).collect())
            .unwrap_or_default();

        if spouses.is_empty() {
            self.issue(
                line_no,
                IssueKind::DanglingDate,
                format!("{event} date on {id} has no spouse to attach to"),
            );
            return;
        }

        for spouse_id in spouses {
            let Some(spouse) = self.tree.individuals.get_mut(&spouse_id) else {
                self.issue(
                    line_no,
                    IssueKind::DanglingDate,
                    format!("{event} date on {id} refers to unknown spouse {spouse_id}"),
                );
                continue;
            };

            match event {
                LifeEvent::Marriage => {
                    if spouse.record_marriage(Some(id), date) {
                        log::debug!("{spouse_id} marries in {id} while an earlier marriage is open");
                    }
                }
                LifeEvent::Divorce => spouse.record_divorce(Some(id), date),
                LifeEvent::Birth | LifeEvent::Death => {}
            }
        }
    }

    fn issue(&mut self, line: usize, kind: IssueKind, detail: String) {
        log::warn!("Line {line}: {kind}: {detail}");
        self.tree.issues.push(ParseIssue { line, kind, detail });
    }
}
