//! Query parameter types shared by the public and admin article handlers.

use folio_core::listing::SortKey;
use folio_db::models::article::ArticleFilter;
use serde::Deserialize;

use crate::error::AppResult;

/// Article list parameters (`?language=&sort_by=&limit=&offset=`).
///
/// `limit` and `offset` are clamped in the engine; an unknown `sort_by`
/// is rejected with 400.
#[derive(Debug, Default, Deserialize)]
pub struct ListArticlesParams {
    pub language: Option<String>,
    pub sort_by: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Admin listing only: restrict to published articles.
    #[serde(default)]
    pub published_only: bool,
}

impl ListArticlesParams {
    /// Build the engine filter. `published_only` forces the public view.
    pub fn into_filter(self, published_only: bool) -> AppResult<ArticleFilter> {
        let sort = match self.sort_by.as_deref().map(str::trim) {
            None | Some("") => SortKey::default(),
            Some(raw) => raw.parse::<SortKey>()?,
        };
        let language = self
            .language
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());

        Ok(ArticleFilter {
            published_only: published_only || self.published_only,
            language,
            sort,
            limit: self.limit,
            offset: self.offset,
        })
    }
}

/// `?pending_only=` flag for version history.
#[derive(Debug, Deserialize)]
pub struct VersionListParams {
    #[serde(default)]
    pub pending_only: bool,
}
