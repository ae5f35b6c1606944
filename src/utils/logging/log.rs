//! Logging utilities
//!
//! Standardized log lines for the audit passes.

use std::path::Path;
use std::time::Duration;

/// Log the start of reading a document
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log the start of a pass over `items` entities
pub fn log_pass_start(pass: &str, items: usize) {
    log::info!("{pass}: {items} entities");
}

/// Log a pass completion with consistent format
///
/// # Arguments
/// * `pass` - Description of the pass
/// * `findings` - Number of findings the pass produced
/// * `elapsed` - Optional elapsed time
pub fn log_pass_complete(pass: &str, findings: usize, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!("{pass} finished with {findings} findings in {duration:?}");
    } else {
        log::info!("{pass} finished with {findings} findings");
    }
}

/// Log a warning, optionally tied to a document
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}
