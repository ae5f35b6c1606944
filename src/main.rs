use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use gedcom_audit::utils::logging::{render_families, render_individuals, render_report};
use gedcom_audit::{AuditConfig, RuleThresholds, audit_file};

#[derive(Parser)]
#[command(name = "gedcom-audit")]
#[command(about = "Parse a GEDCOM document and audit its family graph")]
struct Args {
    /// Path to the .ged file to audit
    file: PathBuf,

    /// Do not print the individuals and families tables
    #[arg(long)]
    no_table: bool,

    /// Print the resolved tree and report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Date treated as today (YYYY-MM-DD); defaults to the local date
    #[arg(long, value_parser = parse_reference_date)]
    reference_date: Option<NaiveDate>,

    /// Families with more children than this are flagged
    #[arg(long)]
    max_siblings: Option<usize>,

    /// Non-twin siblings born closer than this many days are flagged
    #[arg(long)]
    sibling_spacing_days: Option<i64>,
}

fn parse_reference_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

impl Args {
    fn config(&self) -> AuditConfig {
        let mut thresholds = RuleThresholds::default();
        if let Some(max) = self.max_siblings {
            thresholds.max_siblings = max;
        }
        if let Some(days) = self.sibling_spacing_days {
            thresholds.sibling_spacing_days = days;
        }

        let mut config = AuditConfig::default().with_thresholds(thresholds);
        config.reference_date = self.reference_date;
        config.render_tables = !self.no_table;
        config
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();
    info!("{config}");

    let audit = audit_file(&args.file, &config)
        .with_context(|| format!("Failed to audit {}", args.file.display()))?;

    if args.json {
        let json = serde_json::to_string_pretty(&audit).context("Failed to serialize audit")?;
        println!("{json}");
        return Ok(());
    }

    if config.render_tables {
        println!("Individuals");
        print!("{}", render_individuals(&audit.tree));
        println!("Families");
        print!("{}", render_families(&audit.tree));
    }
    print!("{}", render_report(&audit.report));

    info!(
        "Found {} violations in {} entities",
        audit.report.total(),
        audit.tree.entity_count()
    );
    Ok(())
}
