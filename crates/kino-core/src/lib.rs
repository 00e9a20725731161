//! Service plumbing shared by Kino services: configuration, tracing,
//! request middleware and health endpoints.

pub mod config;
pub mod health;
pub mod middleware;
pub mod tracing;
