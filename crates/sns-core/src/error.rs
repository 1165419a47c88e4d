//! Domain-level error types.

use std::fmt;

use thiserror::Error;

use crate::ports::AuthError;

/// The failure kinds a caller can observe from the core.
///
/// Every kind is a recoverable business fault; the transport maps each one to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateIdentity,
    IdentityNotFound,
    InvalidCredential,
    ResourceNotFound,
    PermissionDenied,
    Unauthenticated,
    InvalidToken,
    TokenExpired,
    AlreadyLiked,
    /// Store or crypto failure. Not a business fault.
    Infrastructure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User name {0} is already taken")]
    DuplicateIdentity(String),

    #[error("User {0} not found")]
    IdentityNotFound(String),

    #[error("Password is invalid")]
    InvalidCredential,

    #[error("{entity_type} with id {id} not found")]
    ResourceNotFound { entity_type: &'static str, id: i64 },

    #[error("{user_name} has no permission on {entity_type} {id}")]
    PermissionDenied {
        user_name: String,
        entity_type: &'static str,
        id: i64,
    },

    #[error("Authentication required: {0}")]
    Unauthenticated(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("{user_name} already liked post {post_id}")]
    AlreadyLiked { user_name: String, post_id: i64 },

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::DuplicateIdentity(_) => ErrorKind::DuplicateIdentity,
            DomainError::IdentityNotFound(_) => ErrorKind::IdentityNotFound,
            DomainError::InvalidCredential => ErrorKind::InvalidCredential,
            DomainError::ResourceNotFound { .. } => ErrorKind::ResourceNotFound,
            DomainError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            DomainError::Unauthenticated(_) => ErrorKind::Unauthenticated,
            DomainError::InvalidToken(_) => ErrorKind::InvalidToken,
            DomainError::TokenExpired => ErrorKind::TokenExpired,
            DomainError::AlreadyLiked { .. } => ErrorKind::AlreadyLiked,
            DomainError::Repository(_) | DomainError::Internal(_) => ErrorKind::Infrastructure,
        }
    }

    /// Map a store failure while mutating an already loaded row. A row that vanished
    /// in between is reported as `ResourceNotFound`.
    pub fn on_mutation(entity_type: &'static str, id: i64) -> impl FnOnce(RepoError) -> Self {
        move |err| match err {
            RepoError::NotFound => DomainError::ResourceNotFound { entity_type, id },
            other => DomainError::Repository(other),
        }
    }

    /// Wrap a failed token check as the caller not being authenticated.
    pub fn unauthenticated(err: AuthError) -> Self {
        DomainError::Unauthenticated(err.to_string())
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenExpired => DomainError::TokenExpired,
            AuthError::InvalidToken(msg) => DomainError::InvalidToken(msg),
            AuthError::MissingAuth => {
                DomainError::Unauthenticated(AuthError::MissingAuth.to_string())
            }
            AuthError::HashingError(msg) | AuthError::IssueError(msg) => {
                DomainError::Internal(msg)
            }
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_failures_keep_their_kind() {
        assert_eq!(
            DomainError::from(AuthError::TokenExpired).kind(),
            ErrorKind::TokenExpired
        );
        assert_eq!(
            DomainError::from(AuthError::InvalidToken("bad".into())).kind(),
            ErrorKind::InvalidToken
        );
    }

    #[test]
    fn test_unauthenticated_carries_reason() {
        let err = DomainError::unauthenticated(AuthError::TokenExpired);
        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
        assert!(err.to_string().contains("Token expired"));
    }

    #[test]
    fn test_row_vanishing_mid_mutation_is_not_found() {
        let err = DomainError::on_mutation("Post", 7)(RepoError::NotFound);
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
        assert_eq!(err.to_string(), "Post with id 7 not found");

        let err = DomainError::on_mutation("Post", 7)(RepoError::Query("boom".into()));
        assert_eq!(err.kind(), ErrorKind::Infrastructure);
    }

    #[test]
    fn test_token_issuing_failure_is_infrastructure() {
        let err = DomainError::from(AuthError::IssueError("overflow".into()));
        assert_eq!(err.kind(), ErrorKind::Infrastructure);
    }

    #[test]
    fn test_store_failures_are_infrastructure() {
        let err = DomainError::from(RepoError::Connection("refused".into()));
        assert_eq!(err.kind(), ErrorKind::Infrastructure);
    }
}
