//! Companion form state — draft values, errors, and the submit lifecycle.
//!
//! DESIGN
//! ======
//! A form is built once from the loaded record (edit mode) or from a blank
//! draft (create mode). Edits happen in memory. Submitting runs
//! `idle -> submitting -> resolved`; an invalid draft never leaves `idle` and
//! never reaches the submit handler.

use std::fmt::Display;
use std::future::Future;

use serde::Serialize;

use super::schema::{self, Field, FieldErrors};
use crate::companion::{Companion, CompanionValues};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The handler ran and returned `Ok`.
    Submitted,
    /// Validation failed; the handler was not called.
    Invalid(FieldErrors),
    /// The handler ran and returned an error.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct CompanionForm {
    mode: FormMode,
    defaults: CompanionValues,
    values: CompanionValues,
    errors: FieldErrors,
    phase: SubmitPhase,
}

impl CompanionForm {
    /// Build a form pre-filled from `initial`, or blank when there is none.
    #[must_use]
    pub fn new(initial: Option<&Companion>) -> Self {
        let (mode, defaults) = match initial {
            Some(companion) => (FormMode::Edit, CompanionValues::from(companion)),
            None => (FormMode::Create, CompanionValues::empty()),
        };

        Self { mode, values: defaults.clone(), defaults, errors: FieldErrors::new(), phase: SubmitPhase::Idle }
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub fn values(&self) -> &CompanionValues {
        &self.values
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Inputs are disabled while a submission is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Edit one field. Clears any error previously reported for it.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        field.set(&mut self.values, value.into());
        self.errors.remove(field);
    }

    /// Replace the whole draft, e.g. with a submitted request body.
    pub fn set_values(&mut self, values: CompanionValues) {
        self.values = values;
        self.errors = FieldErrors::new();
    }

    /// Restore the values the form was built with.
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.errors = FieldErrors::new();
        self.phase = SubmitPhase::Idle;
    }

    /// Validate and, if valid, enter `submitting`.
    ///
    /// # Errors
    ///
    /// Returns the field errors when the draft is invalid. The form stays
    /// `idle` and keeps the errors for display.
    pub fn begin_submit(&mut self) -> Result<CompanionValues, FieldErrors> {
        match schema::validate(&self.values) {
            Ok(()) => {
                self.errors = FieldErrors::new();
                self.phase = SubmitPhase::Submitting;
                Ok(self.values.clone())
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.phase = SubmitPhase::Idle;
                Err(errors)
            }
        }
    }

    /// Leave `submitting` once the handler has answered.
    pub fn finish_submit(&mut self) {
        self.phase = SubmitPhase::Resolved;
    }

    /// Validate, then run `on_submit` with the values if they are valid.
    pub async fn handle_submit<F, Fut, E>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(CompanionValues) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Display,
    {
        let values = match self.begin_submit() {
            Ok(values) => values,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        let result = on_submit(values).await;
        self.finish_submit();

        match result {
            Ok(()) => SubmitOutcome::Submitted,
            Err(e) => SubmitOutcome::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
