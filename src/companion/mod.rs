//! Companion domain: stored records, categories, and the store seam.

pub mod model;
pub mod store;

pub use model::{Category, Companion, CompanionValues};
pub use store::{CompanionStore, MemoryStore, PgCompanionStore, StoreError};
