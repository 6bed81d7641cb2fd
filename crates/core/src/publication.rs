//! Draft/published state machine for articles.
//!
//! Transitions are unconditional on the current state and reversible. Every
//! transition preserves the invariant checked by [`Publication::is_consistent`]:
//! an article has an effective publish timestamp exactly when it is published,
//! and that timestamp is the override when one is set, otherwise the moment
//! the article went from draft to published.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Naive formats accepted from editors (HTML `datetime-local` values),
/// interpreted as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationState {
    Draft,
    Published,
}

/// The publication-related columns of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Publication {
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    /// Start of the current published period, kept so a cleared override can
    /// fall back to it.
    pub first_published_at: Option<Timestamp>,
}

impl Publication {
    pub fn draft() -> Self {
        Self {
            is_published: false,
            published_at: None,
            first_published_at: None,
        }
    }

    pub fn state(&self) -> PublicationState {
        if self.is_published {
            PublicationState::Published
        } else {
            PublicationState::Draft
        }
    }

    /// `true` when `is_published` agrees with the presence of both timestamps.
    pub fn is_consistent(&self) -> bool {
        self.is_published == self.published_at.is_some()
            && self.is_published == self.first_published_at.is_some()
    }

    /// Draft/Published -> Published.
    ///
    /// A draft records `now` (captured once, at the transition) as the start
    /// of its published period; an already-published article keeps its start,
    /// so repeated publish calls do not move the public date. The effective
    /// timestamp is the override when one is set, otherwise that start.
    pub fn publish(self, override_at: Option<Timestamp>, now: Timestamp) -> Self {
        let first_published_at = match (self.state(), self.first_published_at) {
            (PublicationState::Published, Some(at)) => at,
            _ => now,
        };
        Self {
            is_published: true,
            published_at: Some(override_at.unwrap_or(first_published_at)),
            first_published_at: Some(first_published_at),
        }
    }

    /// Published/Draft -> Draft. Clears both timestamps.
    pub fn unpublish(self) -> Self {
        Self::draft()
    }

    /// Apply the article's publish-date override after it changed.
    ///
    /// A published article moves to the new date immediately. Clearing the
    /// override (`None`) returns it to the moment it went live. Drafts are
    /// unchanged.
    pub fn with_override(self, override_at: Option<Timestamp>) -> Self {
        match (self.state(), self.first_published_at) {
            (PublicationState::Published, Some(first)) => Self {
                is_published: true,
                published_at: Some(override_at.unwrap_or(first)),
                first_published_at: Some(first),
            },
            _ => self,
        }
    }
}

/// Parse an editor-supplied publish date.
///
/// Accepts RFC 3339 or a naive `YYYY-MM-DDTHH:MM[:SS]` value taken as UTC.
/// `None` and blank input mean "no override".
pub fn parse_publish_date(input: Option<&str>) -> Result<Option<Timestamp>, CoreError> {
    let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(at.with_timezone(&Utc)));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid publish date '{raw}'. Expected YYYY-MM-DDTHH:MM or RFC 3339"
            ))
        })
}
