//! # Auth Module
//!
//! Identifies the caller for `/students/me`. Only "is logged in" is
//! checked; there is no authorization beyond that.

pub mod errors;
pub mod identity;
pub mod jwt;

pub use errors::{AuthError, AuthResult};
pub use identity::{Authenticator, DEFAULT_COOKIE_NAME};
pub use jwt::{JwtClaims, JwtConfig, JwtManager};
