//! Actor identity used to deduplicate views and likes.
//!
//! A request is attributed to a registered user when it carries a valid
//! access token, and to its client network address otherwise. The address
//! fallback is best-effort only: it is trivially spoofable through proxy
//! headers and shared by everyone behind the same NAT, so it deduplicates
//! casual repeat views but is not a security boundary.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Address recorded when no client address could be determined.
pub const UNKNOWN_ADDRESS: &str = "unknown";

/// Maximum stored length of a user-agent string.
pub const MAX_USER_AGENT_LEN: usize = 512;

/// Who performed an engagement action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ActorIdentity {
    /// A registered user, identified by the token subject.
    Authenticated(DbId),
    /// No valid token; identified by client address.
    Anonymous(String),
}

/// Transport-level facts about the client, recorded alongside engagement facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    pub address: String,
    pub user_agent: Option<String>,
}

impl ClientInfo {
    /// Build client info, normalizing a blank address to [`UNKNOWN_ADDRESS`]
    /// and dropping blank user agents.
    pub fn new(address: Option<&str>, user_agent: Option<&str>) -> Self {
        let address = address
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(UNKNOWN_ADDRESS)
            .to_string();
        let user_agent = user_agent
            .map(str::trim)
            .filter(|ua| !ua.is_empty())
            .map(|ua| ua.chars().take(MAX_USER_AGENT_LEN).collect());
        Self {
            address,
            user_agent,
        }
    }
}

impl ActorIdentity {
    /// Resolve the identity for a request. Never fails: absence of a user
    /// yields [`ActorIdentity::Anonymous`] keyed by the client address.
    pub fn resolve(user_id: Option<DbId>, client: &ClientInfo) -> Self {
        match user_id {
            Some(id) => Self::Authenticated(id),
            None => Self::Anonymous(client.address.clone()),
        }
    }

    /// The user id, if the actor is authenticated.
    pub fn user_id(&self) -> Option<DbId> {
        match self {
            Self::Authenticated(id) => Some(*id),
            Self::Anonymous(_) => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The user id, or [`CoreError::Unauthenticated`] for anonymous actors.
    pub fn require_user(&self, action: &str) -> Result<DbId, CoreError> {
        self.user_id()
            .ok_or_else(|| CoreError::Unauthenticated(format!("Login required to {action}")))
    }

    /// Canonical key stored in the `actor_key` column of engagement facts.
    ///
    /// The prefixes keep a numeric user id from ever colliding with an address.
    pub fn actor_key(&self) -> String {
        match self {
            Self::Authenticated(id) => format!("user:{id}"),
            Self::Anonymous(address) => format!("ip:{address}"),
        }
    }
}

/// Extract the originating client from an `X-Forwarded-For` header value.
///
/// Returns the left-most non-empty entry, or `None` if there is none.
pub fn first_forwarded_address(header: &str) -> Option<&str> {
    header.split(',').map(str::trim).find(|a| !a.is_empty())
}
