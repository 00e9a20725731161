//! Auth types shared across Kino services.
//!
//! Sign-in and token issuance live in front of the services; they only see
//! the identity the gateway forwards.

pub mod identity;
