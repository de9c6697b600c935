//! # Request Identity
//!
//! Resolves the caller's student id from request headers. A token may
//! arrive as `Authorization: Bearer <token>` or as a session cookie.

use axum::http::{header, HeaderMap};

use super::errors::{AuthError, AuthResult};
use super::jwt::JwtManager;

/// Default name of the session cookie
pub const DEFAULT_COOKIE_NAME: &str = "session";

/// Authenticates requests against a `JwtManager`
#[derive(Clone)]
pub struct Authenticator {
    jwt: JwtManager,
    cookie_name: String,
}

impl Authenticator {
    pub fn new(jwt: JwtManager, cookie_name: impl Into<String>) -> Self {
        Self {
            jwt,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn jwt(&self) -> &JwtManager {
        &self.jwt
    }

    /// The caller's student id.
    ///
    /// The bearer header wins over the cookie when both are present.
    pub fn authenticate(&self, headers: &HeaderMap) -> AuthResult<i64> {
        let token = bearer_token(headers)
            .or_else(|| cookie_value(headers, &self.cookie_name))
            .ok_or(AuthError::AuthenticationRequired)?;

        self.jwt.student_id(token)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim_start().split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|t| !t.is_empty())
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|v| !v.is_empty())
}
