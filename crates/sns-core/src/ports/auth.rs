//! Authentication ports: bearer tokens and password hashing.

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

/// Claims carried by a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Unique token id, usable as a denylist key.
    pub token_id: Uuid,
    /// The user name the token was issued to.
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Token service trait for issuing and verifying stateless bearer tokens.
///
/// Verification must not touch any store, so it is safe to call from any number of requests at once.
pub trait TokenService: Send + Sync {
    /// Issue a signed token for `subject` valid for `ttl`.
    fn issue(&self, subject: &str, ttl: TimeDelta) -> Result<String, AuthError>;

    /// Check signature, issuer and expiry, then return the claims.
    ///
    /// Tampered tokens fail with [`AuthError::InvalidToken`]; correctly signed but expired ones
    /// fail with [`AuthError::TokenExpired`].
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// The configured lifetime of tokens issued at login.
    fn default_ttl(&self) -> TimeDelta;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Token issuing error: {0}")]
    IssueError(String),
}
