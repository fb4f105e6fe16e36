//! Page loader — the companion (if any) and every category.
//!
//! DESIGN
//! ======
//! Both lookups are independent, so they run concurrently. A missing
//! companion is not an error: the page opens in create mode.

use tracing::debug;

use crate::companion::{Category, Companion, CompanionStore, StoreError};
use crate::form::CompanionForm;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Data the companion form page is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionPage {
    pub companion_id: String,
    pub initial_data: Option<Companion>,
    pub categories: Vec<Category>,
}

impl CompanionPage {
    /// Fresh form pre-filled from `initial_data`.
    #[must_use]
    pub fn form(&self) -> CompanionForm {
        CompanionForm::new(self.initial_data.as_ref())
    }
}

/// Load the companion with `companion_id` and the category list.
///
/// # Errors
///
/// Returns [`PageError::Store`] if either lookup fails.
pub async fn load_companion_page(store: &dyn CompanionStore, companion_id: &str) -> Result<CompanionPage, PageError> {
    let (initial_data, categories) =
        tokio::try_join!(store.find_companion(companion_id), store.list_categories())?;

    debug!(
        %companion_id,
        found = initial_data.is_some(),
        categories = categories.len(),
        "companion page loaded"
    );

    Ok(CompanionPage { companion_id: companion_id.to_owned(), initial_data, categories })
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
