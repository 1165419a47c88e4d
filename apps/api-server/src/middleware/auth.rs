//! Bearer token extraction.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};

use sns_core::DomainError;
use sns_core::ports::AuthError;

use super::error::AppError;

/// The raw bearer token of the request.
///
/// Only the header is parsed here. Verification and the account lookup happen in the services,
/// so a handler taking a `BearerToken` still answers 401 for a bad or expired token.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn parse(req: &HttpRequest) -> Result<Self, AuthError> {
        let value = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingAuth)?;

        let value = value
            .to_str()
            .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

        match value.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(Self(token.trim().to_string())),
            _ => Err(AuthError::InvalidToken(
                "Expected Bearer token".to_string(),
            )),
        }
    }
}

impl FromRequest for BearerToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::parse(req).map_err(|e| {
            tracing::debug!(error = %e, "Rejecting request without usable bearer token");
            AppError::from(DomainError::unauthenticated(e))
        }))
    }
}
