//! Trait definitions for domain models

/// A trait that all table-stored models implement.
///
/// Entities reference each other only by id, so the id is the one thing every
/// table needs to know about its rows.
pub trait EntityModel: Clone + std::fmt::Debug {
    /// Get the unique identifier for this model
    fn id(&self) -> &str;
}
