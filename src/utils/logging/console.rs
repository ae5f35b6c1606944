//! Console output utilities
//!
//! Plain-text tables for the resolved entities and the violation summary. The
//! functions return strings; printing is left to the caller.

use chrono::NaiveDate;
use itertools::Itertools;
use std::fmt::Write;

use crate::algorithm::validation::{Category, ViolationReport};
use crate::collections::FamilyTree;

const NA: &str = "NA";

fn date_or_na(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| NA.to_string(), |d| d.format("%Y-%m-%d").to_string())
}

fn id_list(ids: &[String]) -> String {
    if ids.is_empty() {
        NA.to_string()
    } else {
        format!("{{{}}}", ids.iter().join(", "))
    }
}

/// Render rows under a header with columns padded to their widest cell
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let separator = format!(
        "+{}+",
        widths.iter().map(|w| "-".repeat(w + 2)).join("+")
    );
    let line = |cells: Vec<&str>| {
        let padded = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!(" {cell:<width$} "))
            .join("|");
        format!("|{padded}|")
    };

    let mut out = String::new();
    let _ = writeln!(out, "{separator}");
    let _ = writeln!(out, "{}", line(headers.to_vec()));
    let _ = writeln!(out, "{separator}");
    for row in rows {
        let _ = writeln!(out, "{}", line(row.iter().map(String::as_str).collect()));
    }
    let _ = writeln!(out, "{separator}");
    out
}

/// Render the individuals table in id order
#[must_use]
pub fn render_individuals(tree: &FamilyTree) -> String {
    let rows: Vec<Vec<String>> = tree
        .individuals
        .iter_sorted()
        .map(|i| {
            vec![
                i.id.clone(),
                i.name.clone().unwrap_or_else(|| NA.to_string()),
                i.sex.to_string(),
                date_or_na(i.birth_date),
                i.age.map_or_else(|| NA.to_string(), |a| a.to_string()),
                i.alive.to_string(),
                date_or_na(i.death_date),
                id_list(&i.children),
                i.spouse.clone().unwrap_or_else(|| NA.to_string()),
            ]
        })
        .collect();

    render_table(
        &[
            "ID", "Name", "Gender", "Birthday", "Age", "Alive", "Death", "Children", "Spouse",
        ],
        &rows,
    )
}

/// Render the families table in id order
#[must_use]
pub fn render_families(tree: &FamilyTree) -> String {
    let name_of = |id: Option<&str>| {
        id.and_then(|id| tree.individual(id))
            .and_then(|i| i.name.clone())
            .unwrap_or_else(|| NA.to_string())
    };

    let rows: Vec<Vec<String>> = tree
        .families
        .iter_sorted()
        .map(|f| {
            let divorced = tree
                .husband(f)
                .and_then(|h| tree.divorce_date(f, h));
            vec![
                f.id.clone(),
                date_or_na(tree.marriage_date(f)),
                date_or_na(divorced),
                f.husband.clone().unwrap_or_else(|| NA.to_string()),
                name_of(f.husband.as_deref()),
                f.wife.clone().unwrap_or_else(|| NA.to_string()),
                name_of(f.wife.as_deref()),
                id_list(&f.children),
            ]
        })
        .collect();

    render_table(
        &[
            "ID",
            "Married",
            "Divorced",
            "Husband ID",
            "Husband Name",
            "Wife ID",
            "Wife Name",
            "Children",
        ],
        &rows,
    )
}

/// Render the findings, listings and per-category counts
#[must_use]
pub fn render_report(report: &ViolationReport) -> String {
    let mut out = String::new();

    for finding in &report.findings {
        let _ = writeln!(out, "{finding}");
    }

    let listings = [
        ("US29", "deceased", &report.listings.deceased),
        ("US30", "married", &report.listings.married),
        ("US31", "single", &report.listings.single),
    ];
    for (code, label, ids) in listings {
        let _ = writeln!(out, "DISPLAY {code} {label}: {}", id_list(ids));
    }

    let rows: Vec<Vec<String>> = Category::ALL
        .iter()
        .filter(|c| report.count(**c) > 0)
        .map(|c| {
            vec![
                c.code().unwrap_or("--").to_string(),
                c.name().to_string(),
                report.count(*c).to_string(),
            ]
        })
        .collect();

    if rows.is_empty() {
        let _ = writeln!(out, "No violations found");
    } else {
        out.push_str(&render_table(&["Code", "Category", "Count"], &rows));
        let _ = writeln!(out, "Total violations: {}", report.total());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Family, Individual};

    #[test]
    fn test_render_table_pads_columns() {
        let table = render_table(&["ID", "Name"], &[vec!["@I1@".into(), "Al".into()]]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "+------+------+");
        assert_eq!(lines[1], "| ID   | Name |");
        assert_eq!(lines[3], "| @I1@ | Al   |");
    }

    #[test]
    fn test_render_families_uses_spouse_names() {
        let mut tree = FamilyTree::new();
        let mut husband = Individual::new("@I1@");
        husband.name = Some("John /Smith/".to_string());
        tree.individuals.insert(husband);
        tree.families.insert(Family::new("@F1@").with_husband("@I1@"));

        let rendered = render_families(&tree);
        assert!(rendered.contains("John /Smith/"));
        assert!(rendered.contains("| NA "));
    }

    #[test]
    fn test_render_clean_report() {
        let rendered = render_report(&ViolationReport::new());
        assert!(rendered.contains("No violations found"));
    }
}
