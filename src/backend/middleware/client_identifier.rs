/**
 * Client Identifier Extraction
 *
 * Voters are not authenticated. The identifier stored with a vote is taken
 * from request metadata only:
 *
 * 1. First comma-separated entry of `X-Forwarded-For`, if present
 * 2. Otherwise the IP of the connected peer
 * 3. Otherwise the literal `"unknown"`
 *
 * The header is trusted as sent, so a client can choose its own identifier.
 */

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, HeaderMap},
};

/// Header consulted before the peer address
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Identifier used when no metadata is available
pub const UNKNOWN_IDENTIFIER: &str = "unknown";

/// Width of the `votes.user_identifier` column, in characters
pub const MAX_IDENTIFIER_CHARS: usize = 100;

/// Derive the voter identifier from request headers and peer address
///
/// The result is never empty and never longer than
/// [`MAX_IDENTIFIER_CHARS`] characters.
pub fn derive_identifier(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty());

    let candidate = match forwarded {
        Some(value) => value.split(',').next().unwrap_or_default().trim().to_string(),
        None => peer.map(|addr| addr.ip().to_string()).unwrap_or_default(),
    };

    if candidate.is_empty() {
        return UNKNOWN_IDENTIFIER.to_string();
    }

    candidate.chars().take(MAX_IDENTIFIER_CHARS).collect()
}

/// Axum extractor for the caller's voter identifier
///
/// Never rejects. The peer address is only known when the server is run with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientIdentifier(pub String);

impl ClientIdentifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for ClientIdentifier
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self(derive_identifier(&parts.headers, peer)))
    }
}
