//! Companion form schema — per-field rules and their messages.
//!
//! DESIGN
//! ======
//! Every field is a string with a minimum length. Validation collects one
//! message per failing field, so the caller can show each next to its
//! input. Length is counted in chars, untrimmed: a name of a single space is
//! accepted.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::companion::CompanionValues;

pub const INSTRUCTIONS_MIN_CHARS: usize = 200;

/// Form fields in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Description,
    Instructions,
    Seed,
    Src,
    CategoryId,
}

impl Field {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Description,
        Self::Instructions,
        Self::Seed,
        Self::Src,
        Self::CategoryId,
    ];

    /// Name used in JSON bodies and error maps.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Instructions => "instructions",
            Self::Seed => "seed",
            Self::Src => "src",
            Self::CategoryId => "categoryId",
        }
    }

    /// Minimum accepted length in chars.
    #[must_use]
    pub fn min_chars(self) -> usize {
        match self {
            Self::Instructions => INSTRUCTIONS_MIN_CHARS,
            _ => 1,
        }
    }

    /// Message shown when the field fails its rule.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Name => "Name is required",
            Self::Description => "Description is required",
            Self::Instructions => "Instructions require at least 200 characters",
            Self::Seed => "Seed is required",
            Self::Src => "Image is required",
            Self::CategoryId => "Category is required",
        }
    }

    /// Current value of this field in `values`. An unset category reads as
    /// `None`.
    #[must_use]
    pub fn value(self, values: &CompanionValues) -> Option<&str> {
        match self {
            Self::Name => Some(values.name.as_str()),
            Self::Description => Some(values.description.as_str()),
            Self::Instructions => Some(values.instructions.as_str()),
            Self::Seed => Some(values.seed.as_str()),
            Self::Src => Some(values.src.as_str()),
            Self::CategoryId => values.category_id.as_deref(),
        }
    }

    /// Overwrite this field in `values`.
    pub fn set(self, values: &mut CompanionValues, value: String) {
        match self {
            Self::Name => values.name = value,
            Self::Description => values.description = value,
            Self::Instructions => values.instructions = value,
            Self::Seed => values.seed = value,
            Self::Src => values.src = value,
            Self::CategoryId => values.category_id = Some(value),
        }
    }

    fn check(self, values: &CompanionValues) -> Result<(), &'static str> {
        match self.value(values) {
            Some(v) if v.chars().count() >= self.min_chars() => Ok(()),
            _ => Err(self.message()),
        }
    }
}

/// Field-level validation failures, at most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Check every field rule against `values`.
///
/// # Errors
///
/// Returns the [`FieldErrors`] for every field that fails its rule.
pub fn validate(values: &CompanionValues) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        if let Err(message) = field.check(values) {
            errors.insert(field, message);
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
