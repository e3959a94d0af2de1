//! Caller identity as resolved by the API gateway.
//!
//! The gateway authenticates the session and forwards the request with
//! `X-Hasura-*` headers describing the caller. These headers are trusted only
//! because the gateway strips or overwrites any caller-supplied values before
//! forwarding; this service must never be exposed without the gateway in front.

use crate::errors::ApiError;
use axum::extract::FromRequestParts;
use axum::response::{Html, IntoResponse, Response};
use http::request::Parts;
use http::{HeaderMap, StatusCode};
use thiserror::Error;

pub const ALLOWED_ROLES_HEADER: &str = "x-hasura-allowed-roles";
pub const BASE_DOMAIN_HEADER: &str = "x-hasura-base-domain";
pub const USER_ID_HEADER: &str = "x-hasura-user-id";

pub const ANONYMOUS_ROLE: &str = "anonymous";

/// Returned when a request did not pass through the gateway, which is the
/// usual case while developing locally.
pub const GATEWAY_REQUIRED_HTML: &str = r#"This route can only be accessed via the Hasura API gateway.
Add headers via your browser if you're testing locally.<br/>
<a href="https://docs.hasura.io/0.15/manual/gateway/session-middleware.html"
target="_blank">Read the docs.</a>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayIdentity {
    /// No roles header: the gateway was bypassed
    Missing,
    /// A visitor without a session
    Anonymous { base_domain: String },
    /// A logged-in user
    User {
        base_domain: String,
        user_id: String,
        roles: Vec<String>,
        /// Roles exactly as the gateway sent them
        raw_roles: String,
    },
}

/// A gateway header was present but could not be read as text
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Header '{0}' is not valid visible ASCII")]
pub struct UnreadableHeader(pub &'static str);

impl From<UnreadableHeader> for ApiError {
    fn from(err: UnreadableHeader) -> Self {
        log::warn!("Rejecting request: {}", err);
        ApiError::bad_request(err)
    }
}

impl GatewayIdentity {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, UnreadableHeader> {
        let raw_roles = header_str(headers, ALLOWED_ROLES_HEADER)?;
        if raw_roles.is_empty() {
            return Ok(Self::Missing);
        }

        let base_domain = header_str(headers, BASE_DOMAIN_HEADER)?;
        let roles = parse_roles(&raw_roles);
        if roles.iter().any(|role| role == ANONYMOUS_ROLE) {
            return Ok(Self::Anonymous { base_domain });
        }

        Ok(Self::User {
            base_domain,
            user_id: header_str(headers, USER_ID_HEADER)?,
            roles,
            raw_roles,
        })
    }
}

impl<S: Send + Sync> FromRequestParts<S> for GatewayIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers)?)
    }
}

/// Response for requests that carry no gateway headers
pub fn gateway_required() -> Response {
    log::warn!("Request without gateway headers, was the gateway bypassed?");
    (StatusCode::OK, Html(GATEWAY_REQUIRED_HTML)).into_response()
}

/// Value of `name`, empty when absent. A value that is not text is an error
/// rather than empty, so it can never stand in for a missing user id.
fn header_str(headers: &HeaderMap, name: &'static str) -> Result<String, UnreadableHeader> {
    match headers.get(name) {
        Some(value) => value
            .to_str()
            .map(|v| v.trim().to_string())
            .map_err(|_| UnreadableHeader(name)),
        None => Ok(String::new()),
    }
}

fn parse_roles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(String::from)
        .collect()
}
