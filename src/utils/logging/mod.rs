//! Logging utilities for output
//!
//! This module provides utilities for logging and console output.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use console::{render_families, render_individuals, render_report};
pub use log::{log_operation_start, log_pass_complete, log_pass_start, log_warning};
