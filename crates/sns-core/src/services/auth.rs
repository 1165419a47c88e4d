use std::sync::Arc;

use chrono::TimeDelta;

use crate::domain::{NewUser, User};
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, TokenClaims, TokenService, UserRepository};

use super::Authenticator;

/// A bearer token handed out at login.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: TimeDelta,
}

/// Registration and login.
///
/// Tokens are stateless: login writes nothing to the store.
#[derive(Clone)]
pub struct AuthService {
    authenticator: Authenticator,
    passwords: Arc<dyn PasswordService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            authenticator: Authenticator::new(users, tokens),
            passwords,
        }
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Register a new account with role USER.
    pub async fn join(&self, user_name: &str, password: &str) -> Result<User, DomainError> {
        let users = self.authenticator.users();

        if users.find_by_user_name(user_name).await?.is_some() {
            return Err(DomainError::DuplicateIdentity(user_name.to_string()));
        }

        let password_hash = self.passwords.hash(password)?;

        // The store also rejects names held by deleted accounts.
        let user = users
            .create(NewUser::new(user_name, password_hash))
            .await
            .map_err(|e| match e {
                RepoError::Constraint(_) => DomainError::DuplicateIdentity(user_name.to_string()),
                other => DomainError::Repository(other),
            })?;

        tracing::info!(user_id = %user.id, user_name = %user.user_name, "User joined");
        Ok(user)
    }

    /// Check the password and issue a token bound to the user name.
    pub async fn login(&self, user_name: &str, password: &str) -> Result<IssuedToken, DomainError> {
        let user = self
            .authenticator
            .users()
            .find_by_user_name(user_name)
            .await?
            .ok_or_else(|| DomainError::IdentityNotFound(user_name.to_string()))?;

        if !self.passwords.verify(password, &user.password_hash)? {
            tracing::warn!(user_name = %user_name, "Login rejected: password mismatch");
            return Err(DomainError::InvalidCredential);
        }

        let tokens = self.authenticator.tokens();
        let expires_in = tokens.default_ttl();
        let access_token = tokens.issue(&user.user_name, expires_in)?;

        tracing::info!(user_id = %user.id, user_name = %user.user_name, "User logged in");
        Ok(IssuedToken {
            access_token,
            expires_in,
        })
    }

    /// Verify a token without loading the account.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, DomainError> {
        Ok(self.authenticator.tokens().verify(token)?)
    }

    /// Resolve the active account behind a token.
    pub async fn authenticate(&self, token: &str) -> Result<User, DomainError> {
        self.authenticator.caller(token).await
    }
}
