//! Algorithm implementations for the audit workflow
//!
//! The resolver derives relationship attributes on an assembled tree; the
//! validation engine evaluates the rule catalogue on the resolved tree.

pub mod resolver;
pub mod validation;

pub use resolver::resolve;
pub use validation::{Category, Finding, Listings, Validator, ViolationReport};
