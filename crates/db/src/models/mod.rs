//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` input DTOs for the operations that write it

pub mod article;
pub mod article_version;
pub mod comment;
pub mod engagement;
