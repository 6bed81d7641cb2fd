//! Request extractors for authentication, authorization and actor identity.
//!
//! - [`auth::AuthUser`] -- Requires a valid JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires a token with `is_admin`.
//! - [`actor::Actor`] -- Resolves who is engaging with an article; never rejects.

pub mod actor;
pub mod auth;
pub mod rbac;
