//! Actor identity extractor for public read and engagement routes.
//!
//! A valid bearer token makes the actor [`ActorIdentity::Authenticated`].
//! A missing, malformed or expired token is not an error here: the actor
//! falls back to the client address, taken from `X-Forwarded-For`, then
//! `X-Real-IP`, then the socket peer. Proxy headers are client-controlled,
//! so address identities only deduplicate casual repeats.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::header::USER_AGENT;
use axum::http::request::Parts;
use folio_core::identity::{first_forwarded_address, ActorIdentity, ClientInfo};

use super::auth::bearer_token;
use crate::auth::jwt::validate_token;
use crate::state::AppState;

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// The resolved actor plus the transport facts recorded with its engagement.
#[derive(Debug, Clone)]
pub struct Actor {
    pub identity: ActorIdentity,
    pub client: ClientInfo,
}

impl FromRequestParts<AppState> for Actor {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = bearer_token(parts)
            .ok()
            .flatten()
            .and_then(|token| validate_token(token, &state.config.jwt).ok())
            .map(|claims| claims.sub);

        let address = client_address(parts);
        let user_agent = header_str(parts, USER_AGENT.as_str());
        let client = ClientInfo::new(address.as_deref(), user_agent);
        let identity = ActorIdentity::resolve(user_id, &client);

        Ok(Actor { identity, client })
    }
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}

/// Best-effort client address. `None` when nothing is known.
fn client_address(parts: &Parts) -> Option<String> {
    if let Some(forwarded) = header_str(parts, X_FORWARDED_FOR).and_then(first_forwarded_address)
    {
        return Some(forwarded.to_string());
    }
    if let Some(real_ip) = header_str(parts, X_REAL_IP)
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return Some(real_ip.to_string());
    }
    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}
