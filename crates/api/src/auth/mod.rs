//! Access-token validation.
//!
//! - [`jwt`] -- HS256 claims, validation, and a minting helper for operators and tests.

pub mod jwt;
