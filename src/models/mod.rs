//! Domain models for the family graph

pub mod family;
pub mod individual;
pub mod traits;
pub mod types;

pub use family::Family;
pub use individual::{Individual, MarriageRecord};
pub use traits::EntityModel;
pub use types::{LifeEvent, Sex};
