//! Companion records and the editable draft.

use serde::{Deserialize, Deserializer, Serialize};

/// Stored companion. Mirrors the `companions` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Companion {
    pub id: String,
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub seed: String,
    pub src: String,
    pub category_id: String,
}

/// Classification tag a companion is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// In-memory draft edited by the form. May be invalid until submitted.
///
/// Missing, `null`, or non-string JSON fields deserialize as empty so every
/// body reaches the validator instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanionValues {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub instructions: String,
    #[serde(deserialize_with = "lenient_string")]
    pub seed: String,
    #[serde(deserialize_with = "lenient_string")]
    pub src: String,
    #[serde(deserialize_with = "lenient_option")]
    pub category_id: Option<String>,
}

/// Any JSON value; only strings are kept.
fn lenient_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_option(deserializer)?.unwrap_or_default())
}

impl CompanionValues {
    /// Blank draft used in create mode. No category is preselected.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl From<&Companion> for CompanionValues {
    fn from(companion: &Companion) -> Self {
        Self {
            name: companion.name.clone(),
            description: companion.description.clone(),
            instructions: companion.instructions.clone(),
            seed: companion.seed.clone(),
            src: companion.src.clone(),
            category_id: Some(companion.category_id.clone()),
        }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
