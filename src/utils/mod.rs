//! Utility functions shared across the crate

pub mod date;
pub mod logging;

pub use date::{DateFormatConfig, parse_date_string};
