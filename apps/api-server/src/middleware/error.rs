//! Error handling middleware - RFC 7807 compliant responses.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use sns_core::{DomainError, ErrorKind};
use sns_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Unauthorized(detail) => ErrorResponse::unauthorized(detail),
            AppError::Forbidden(detail) => ErrorResponse::forbidden(detail),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::Internal(detail) => {
                // Detail stays in the log only
                tracing::error!(error = %detail, "Internal error");
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let detail = err.to_string();
        match err.kind() {
            ErrorKind::DuplicateIdentity | ErrorKind::AlreadyLiked => AppError::Conflict(detail),
            ErrorKind::IdentityNotFound | ErrorKind::ResourceNotFound => {
                AppError::NotFound(detail)
            }
            ErrorKind::InvalidCredential
            | ErrorKind::Unauthenticated
            | ErrorKind::InvalidToken
            | ErrorKind::TokenExpired => AppError::Unauthorized(detail),
            ErrorKind::PermissionDenied => AppError::Forbidden(detail),
            ErrorKind::Infrastructure => AppError::Internal(detail),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use sns_core::error::RepoError;
    use sns_core::ports::AuthError;

    use super::*;

    fn status_of(err: DomainError) -> StatusCode {
        AppError::from(err).status_code()
    }

    #[test]
    fn test_domain_errors_map_to_statuses() {
        assert_eq!(
            status_of(DomainError::DuplicateIdentity("alice".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(DomainError::AlreadyLiked {
                user_name: "alice".into(),
                post_id: 1
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(DomainError::IdentityNotFound("alice".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(DomainError::ResourceNotFound {
                entity_type: "Post",
                id: 1
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(DomainError::InvalidCredential),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(DomainError::from(AuthError::TokenExpired)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(DomainError::unauthenticated(AuthError::MissingAuth)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(DomainError::PermissionDenied {
                user_name: "bob".into(),
                entity_type: "Post",
                id: 1
            }),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(DomainError::from(RepoError::Connection("refused".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_internal_detail_is_not_exposed() {
        let err = AppError::from(DomainError::from(RepoError::Query(
            "relation \"posts\" does not exist".into(),
        )));

        let response = err.error_response();
        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body["status"], 500);
        assert!(body.get("detail").is_none());
    }
}
