//! Pure domain rules for the Folio publishing backend.
//!
//! Nothing in this crate performs I/O; the storage layer (`folio-db`) and the
//! HTTP shell (`folio-api`) call into these modules to decide what to write.

pub mod comments;
pub mod error;
pub mod identity;
pub mod listing;
pub mod publication;
pub mod summary;
pub mod types;
pub mod versioning;
