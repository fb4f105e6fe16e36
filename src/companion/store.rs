//! Companion store — the query surface the page loader consumes.
//!
//! DESIGN
//! ======
//! Two lookups only: one companion by id, and every category. Postgres backs
//! production; `MemoryStore` backs tests and the `STORE=memory` dev mode.
//! Unknown ids are `Ok(None)`, never an error, so callers can fall back to
//! create mode.

use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::RwLock;

use super::model::{Category, Companion};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read access to companions and categories. Enables mocking in tests.
#[async_trait::async_trait]
pub trait CompanionStore: Send + Sync {
    /// Look up a companion by id.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend fails. A missing record is
    /// `Ok(None)`.
    async fn find_companion(&self, id: &str) -> Result<Option<Companion>, StoreError>;

    /// List every category, ordered by name.
    ///
    /// Postgres orders by the database collation; `MemoryStore` compares
    /// lowercased names, which agrees with common collations for ASCII
    /// names but may differ for accented ones.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend fails.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
}

// =============================================================================
// POSTGRES
// =============================================================================

pub struct PgCompanionStore {
    pool: PgPool,
}

impl PgCompanionStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CompanionStore for PgCompanionStore {
    async fn find_companion(&self, id: &str) -> Result<Option<Companion>, StoreError> {
        let row = sqlx::query_as::<_, Companion>(
            "SELECT id, name, description, instructions, seed, src, category_id
             FROM companions
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name ASC, id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-process store. Cloning shares the same maps.
#[derive(Clone, Default)]
pub struct MemoryStore {
    companions: Arc<RwLock<HashMap<String, Companion>>>,
    categories: Arc<RwLock<Vec<Category>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the same categories the seed migration inserts.
    #[must_use]
    pub fn with_default_categories() -> Self {
        let categories: Vec<Category> = [
            ("famous-people", "Famous People"),
            ("movies-tv", "Movies & TV"),
            ("musicians", "Musicians"),
            ("games", "Games"),
            ("animals", "Animals"),
            ("philosophy", "Philosophy"),
            ("scientists", "Scientists"),
        ]
        .into_iter()
        .map(|(id, name)| Category { id: id.to_owned(), name: name.to_owned() })
        .collect();

        Self { companions: Arc::default(), categories: Arc::new(RwLock::new(categories)) }
    }

    pub async fn insert_category(&self, category: Category) {
        let mut categories = self.categories.write().await;
        categories.retain(|c| c.id != category.id);
        categories.push(category);
    }

    pub async fn insert_companion(&self, companion: Companion) {
        self.companions.write().await.insert(companion.id.clone(), companion);
    }
}

#[async_trait::async_trait]
impl CompanionStore for MemoryStore {
    async fn find_companion(&self, id: &str) -> Result<Option<Companion>, StoreError> {
        Ok(self.companions.read().await.get(id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut categories = self.categories.read().await.clone();
        categories.sort_by_cached_key(|c| (c.name.to_lowercase(), c.name.clone(), c.id.clone()));
        Ok(categories)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
