//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Methods
//! that the engine runs inside transactions accept any `PgExecutor`; pure
//! reads take `&PgPool`.

pub mod article_repo;
pub mod article_version_repo;
pub mod comment_repo;
pub mod engagement_repo;

pub use article_repo::ArticleRepo;
pub use article_version_repo::ArticleVersionRepo;
pub use comment_repo::CommentRepo;
pub use engagement_repo::{LikeRepo, ViewRepo};
