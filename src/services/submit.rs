//! Submission handler for the companion form.
//!
//! Valid drafts are logged and dropped. Nothing is written to the store;
//! there is no create/update endpoint behind the form yet.

use std::convert::Infallible;

use tracing::info;

use crate::companion::CompanionValues;

/// Log a validated draft.
///
/// # Errors
///
/// Never fails; the error type keeps the signature ready for a real write
/// path.
#[allow(clippy::unused_async)]
pub async fn log_submission(companion_id: String, values: CompanionValues) -> Result<(), Infallible> {
    info!(
        %companion_id,
        name = %values.name,
        description = %values.description,
        category_id = values.category_id.as_deref().unwrap_or_default(),
        src = %values.src,
        instructions_chars = values.instructions.chars().count(),
        seed_chars = values.seed.chars().count(),
        "companion form submitted"
    );
    Ok(())
}

#[cfg(test)]
#[path = "submit_test.rs"]
mod tests;
