//! # JWT Token Management
//!
//! Access tokens that carry a student's identity.
//!
//! ## Invariants
//! - Validation is stateless (no Store lookup)
//! - `sub` is the student id as a decimal string

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::errors::{AuthError, AuthResult};

/// JWT claims for access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (student id)
    pub sub: String,

    /// Issued at timestamp (Unix epoch seconds)
    pub iat: i64,

    /// Expiration timestamp (Unix epoch seconds)
    pub exp: i64,

    /// Audience
    pub aud: String,

    /// Issuer
    pub iss: String,
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing
    pub secret: String,

    /// Access token lifetime
    pub access_token_ttl: Duration,

    /// Issuer identifier
    pub issuer: String,

    /// Audience identifier
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "CHANGE_THIS_SECRET_IN_PRODUCTION".to_string(),
            access_token_ttl: Duration::minutes(60),
            issuer: "students-crud".to_string(),
            audience: "students-crud".to_string(),
        }
    }
}

/// JWT manager for token generation and validation
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    /// Create a new JWT manager with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue an access token identifying `student_id`
    pub fn issue(&self, student_id: i64) -> AuthResult<String> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(self.config.access_token_ttl)
            .ok_or(AuthError::TokenGenerationFailed)?;

        let claims = JwtClaims {
            sub: student_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            aud: self.config.audience.clone(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenGenerationFailed)
    }

    /// Validate an access token and extract claims
    pub fn validate_token(&self, token: &str) -> AuthResult<JwtClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);

        let token_data =
            decode::<JwtClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AuthError::InvalidSignature
                    }
                    _ => AuthError::MalformedToken,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Validate a token and return the student id it names
    pub fn student_id(&self, token: &str) -> AuthResult<i64> {
        let claims = self.validate_token(token)?;
        Self::get_student_id(&claims)
    }

    /// Extract student id from validated claims
    pub fn get_student_id(claims: &JwtClaims) -> AuthResult<i64> {
        claims
            .sub
            .parse::<i64>()
            .map_err(|_| AuthError::MalformedToken)
    }

    /// Token lifetime in seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.config.access_token_ttl.num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_manager() -> JwtManager {
        JwtManager::new(JwtConfig {
            secret: "test_secret_key_for_testing_only".to_string(),
            access_token_ttl: Duration::minutes(15),
            issuer: "test".to_string(),
            audience: "test".to_string(),
        })
    }

    #[test]
    fn test_token_generation() {
        let manager = create_test_manager();
        let token = manager.issue(10).unwrap();

        // header.payload.signature
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_token_round_trips_student_id() {
        let manager = create_test_manager();
        let token = manager.issue(10).unwrap();

        let claims = manager.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "10");
        assert_eq!(manager.student_id(&token).unwrap(), 10);
    }

    #[test]
    fn test_invalid_token_rejected() {
        let manager = create_test_manager();

        let result = manager.validate_token("invalid.token.here");
        assert!(matches!(
            result,
            Err(AuthError::MalformedToken) | Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let manager1 = JwtManager::new(JwtConfig {
            secret: "secret_one".to_string(),
            ..JwtConfig::default()
        });

        let manager2 = JwtManager::new(JwtConfig {
            secret: "secret_two".to_string(),
            ..JwtConfig::default()
        });

        let token = manager1.issue(23).unwrap();
        let result = manager2.validate_token(&token);
        assert!(matches!(result, Err(AuthError::InvalidSignature)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let secret = "test_secret";
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());

        let now = Utc::now();
        let claims = JwtClaims {
            sub: "10".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
            aud: "test".to_string(),
            iss: "test".to_string(),
        };

        let token = encode(&Header::default(), &claims, &encoding_key).unwrap();

        let manager = JwtManager::new(JwtConfig {
            secret: secret.to_string(),
            access_token_ttl: Duration::minutes(15),
            issuer: "test".to_string(),
            audience: "test".to_string(),
        });

        let result = manager.validate_token(&token);
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_unrepresentable_expiry_fails_issue() {
        let manager = JwtManager::new(JwtConfig {
            access_token_ttl: Duration::seconds(i64::MAX / 1000),
            ..JwtConfig::default()
        });

        assert_eq!(manager.issue(10), Err(AuthError::TokenGenerationFailed));
    }

    #[test]
    fn test_non_numeric_subject_rejected() {
        let claims = JwtClaims {
            sub: "not-a-number".to_string(),
            iat: 0,
            exp: 0,
            aud: "test".to_string(),
            iss: "test".to_string(),
        };
        assert!(matches!(
            JwtManager::get_student_id(&claims),
            Err(AuthError::MalformedToken)
        ));
    }
}
