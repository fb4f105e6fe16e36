//! Companion form service.
//!
//! Loads a companion record and the category list, exposes the companion
//! form (values, validation, submit lifecycle, render-ready view) over HTTP,
//! and logs validated submissions.

pub mod companion;
pub mod config;
pub mod db;
pub mod form;
pub mod routes;
pub mod services;
pub mod state;
