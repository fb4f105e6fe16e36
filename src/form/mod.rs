//! Companion form: schema, state, and view.
//!
//! ARCHITECTURE
//! ============
//! `schema` owns the field rules, `state` owns the draft and the submit
//! lifecycle, `view` turns a form into data a client can draw. Routes build a
//! form per request; nothing here touches storage.

pub mod schema;
pub mod state;
pub mod view;

pub use schema::{Field, FieldErrors, validate};
pub use state::{CompanionForm, FormMode, SubmitOutcome, SubmitPhase};
pub use view::{CompanionFormView, render};
