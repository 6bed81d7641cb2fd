//! The content lifecycle engine.
//!
//! Each function is one operation of the publishing backend: it takes the
//! pool plus typed arguments and returns a payload or an [`EngineError`].
//! Multi-statement operations run in a single transaction; a transaction
//! dropped before `commit` (error or cancelled request) rolls back, so no
//! operation is ever partially applied. Nothing here retries.
//!
//! - [`catalog`] -- create, read, list, delete articles
//! - [`ledger`] -- pending edits, version apply, history
//! - [`publication`] -- publish, unpublish, publish-date override
//! - [`engagement`] -- deduplicated views and likes
//! - [`comments`] -- public comments

pub mod catalog;
pub mod comments;
pub mod engagement;
pub mod ledger;
pub mod publication;

use folio_core::error::CoreError;
use folio_core::types::DbId;

/// Failure of an engine operation: a domain error or a storage failure.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;

pub(crate) fn not_found(entity: &'static str, id: DbId) -> EngineError {
    EngineError::Core(CoreError::NotFound { entity, id })
}
