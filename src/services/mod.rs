//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own loading and submission so route handlers can stay
//! focused on protocol translation.

pub mod page;
pub mod submit;
