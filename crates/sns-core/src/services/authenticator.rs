use std::sync::Arc;

use crate::domain::User;
use crate::error::DomainError;
use crate::ports::{TokenService, UserRepository};

/// Resolves the account behind a presented bearer token.
#[derive(Clone)]
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenService>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<dyn TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Verify `token` and load the active user it names.
    ///
    /// Fails with `Unauthenticated` for invalid or expired tokens and with `IdentityNotFound`
    /// when the subject was deleted after the token was issued.
    pub async fn caller(&self, token: &str) -> Result<User, DomainError> {
        let claims = self
            .tokens
            .verify(token)
            .map_err(DomainError::unauthenticated)?;

        self.users
            .find_by_user_name(&claims.subject)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_name = %claims.subject, "Token subject no longer resolves");
                DomainError::IdentityNotFound(claims.subject)
            })
    }

    pub(crate) fn users(&self) -> &Arc<dyn UserRepository> {
        &self.users
    }

    pub(crate) fn tokens(&self) -> &Arc<dyn TokenService> {
        &self.tokens
    }
}
