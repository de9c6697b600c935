//! HTTP Server Configuration
//!
//! Bind address, CORS, login redirect, token settings, seed data and
//! logging. Every field has a default so an empty `{}` is a valid file.

use std::path::PathBuf;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::{JwtConfig, DEFAULT_COOKIE_NAME};
use crate::observability::LoggingConfig;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Where unauthenticated `/students/me` callers are sent
    #[serde(default = "default_login_url")]
    pub login_url: String,

    /// Optional JSON file loaded into the Store at startup
    #[serde(default)]
    pub seed_path: Option<PathBuf>,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Token settings for the identity layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_secret")]
    pub secret: String,

    #[serde(default = "default_issuer")]
    pub issuer: String,

    #[serde(default = "default_issuer")]
    pub audience: String,

    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,

    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_login_url() -> String {
    "/accounts/login/".to_string()
}

fn default_secret() -> String {
    JwtConfig::default().secret
}

fn default_issuer() -> String {
    "students-crud".to_string()
}

fn default_token_ttl_minutes() -> i64 {
    60
}

fn default_cookie_name() -> String {
    DEFAULT_COOKIE_NAME.to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            login_url: default_login_url(),
            seed_path: None,
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            issuer: default_issuer(),
            audience: default_issuer(),
            token_ttl_minutes: default_token_ttl_minutes(),
            cookie_name: default_cookie_name(),
        }
    }
}

impl AuthConfig {
    /// Token lifetime, `None` when an expiry could not be represented
    fn token_ttl(&self) -> Option<Duration> {
        Duration::try_minutes(self.token_ttl_minutes)
            .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
    }

    /// Signing settings for `JwtManager`
    ///
    /// An out-of-range lifetime falls back to the default; `validate`
    /// rejects it before the server starts.
    pub fn jwt_config(&self) -> JwtConfig {
        let defaults = JwtConfig::default();
        JwtConfig {
            secret: self.secret.clone(),
            access_token_ttl: self.token_ttl().unwrap_or(defaults.access_token_ttl),
            issuer: self.issuer.clone(),
            audience: self.audience.clone(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject values that would leave the server unusable
    pub fn validate(&self) -> Result<(), String> {
        if self.auth.secret.is_empty() {
            return Err("auth.secret must not be empty".to_string());
        }
        if self.auth.token_ttl_minutes <= 0 {
            return Err("auth.token_ttl_minutes must be > 0".to_string());
        }
        if self.auth.token_ttl().is_none() {
            return Err("auth.token_ttl_minutes is out of range".to_string());
        }
        if self.auth.cookie_name.is_empty() {
            return Err("auth.cookie_name must not be empty".to_string());
        }
        if self.login_url.is_empty() {
            return Err("login_url must not be empty".to_string());
        }
        Ok(())
    }
}
