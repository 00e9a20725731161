//! Test utilities for Kino services.
//!
//! Import from dev-dependencies only.

pub mod auth;
