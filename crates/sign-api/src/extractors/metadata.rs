//! Client metadata extractor
//!
//! Captures the caller's address and user agent for audit entries.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use sign_core::entities::RequestMetadata;

/// Request metadata recorded alongside audited changes
#[derive(Debug, Clone, Default)]
pub struct ClientMetadata(pub RequestMetadata);

/// Read the client IP and user agent from request headers
///
/// The IP is the first `x-forwarded-for` entry, falling back to `x-real-ip`.
pub fn request_metadata(headers: &HeaderMap) -> RequestMetadata {
    let header_str = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let ip_address = header_str("x-forwarded-for")
        .and_then(|list| list.split(',').map(str::trim).find(|ip| !ip.is_empty()))
        .or_else(|| header_str("x-real-ip"))
        .map(String::from);

    let user_agent = header_str(header::USER_AGENT.as_str()).map(String::from);

    RequestMetadata {
        ip_address,
        user_agent,
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ClientMetadata
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ClientMetadata(request_metadata(&parts.headers)))
    }
}
