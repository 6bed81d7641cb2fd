//! Article listing: sort keys and pagination clamps.

use std::str::FromStr;

use crate::error::CoreError;

/// Default page size when the caller does not supply `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Upper bound on `limit`.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Recency expression: the public date when published, else creation time.
const RECENCY: &str = "COALESCE(published_at, created_at) DESC";

/// Orderings offered by the article list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Recent,
    MostCommented,
    MostLiked,
    MostViewed,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Recent,
        SortKey::MostCommented,
        SortKey::MostLiked,
        SortKey::MostViewed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::MostCommented => "most_commented",
            SortKey::MostLiked => "most_liked",
            SortKey::MostViewed => "most_viewed",
        }
    }

    /// SQL `ORDER BY` body. Built only from fixed strings, never user input.
    pub fn order_by(&self) -> String {
        let primary = match self {
            SortKey::Recent => return format!("{RECENCY}, id DESC"),
            SortKey::MostCommented => "comment_count DESC",
            SortKey::MostLiked => "like_count DESC",
            SortKey::MostViewed => "view_count DESC",
        };
        format!("{primary}, {RECENCY}, id DESC")
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid sort_by '{s}'. Must be one of: {}",
                    SortKey::ALL.map(|k| k.as_str()).join(", ")
                ))
            })
    }
}

/// Clamp a user-provided limit to `[1, max]`, using `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Number of pages needed for `total` items at `limit` per page.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}
