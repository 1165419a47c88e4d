//! Shared service wiring for the integration suites.
//!
//! Everything runs against the in-memory repositories with the real Argon2
//! and JWT adapters.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::TimeDelta;

use sns_core::domain::User;
use sns_core::ports::BaseRepository;
use sns_core::services::{AuthService, CommentService, LikeService, PostService};
use sns_infra::{
    Argon2PasswordService, InMemoryCommentRepository, InMemoryLikeRepository,
    InMemoryPostRepository, InMemoryUserRepository, JwtConfig, JwtTokenService,
};

pub struct TestApp {
    pub auth: AuthService,
    pub posts: PostService,
    pub comments: CommentService,
    pub likes: LikeService,
    pub users: Arc<InMemoryUserRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_ttl(TimeDelta::hours(1))
    }

    pub fn with_ttl(token_ttl: TimeDelta) -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let post_repo = Arc::new(InMemoryPostRepository::new());

        let tokens = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "integration-test-secret".to_string(),
            token_ttl,
            issuer: "sns-test".to_string(),
        }));

        let auth = AuthService::new(
            users.clone(),
            Arc::new(Argon2PasswordService::new()),
            tokens,
        );
        let authenticator = auth.authenticator().clone();

        Self {
            posts: PostService::new(authenticator.clone(), post_repo.clone()),
            comments: CommentService::new(
                authenticator.clone(),
                post_repo.clone(),
                Arc::new(InMemoryCommentRepository::new()),
            ),
            likes: LikeService::new(
                authenticator,
                post_repo,
                Arc::new(InMemoryLikeRepository::new()),
            ),
            auth,
            users,
        }
    }

    /// Join and log in, returning the account and its bearer token.
    pub async fn sign_up(&self, user_name: &str, password: &str) -> (User, String) {
        let user = self.auth.join(user_name, password).await.unwrap();
        let token = self.auth.login(user_name, password).await.unwrap();
        (user, token.access_token)
    }

    /// Soft-delete an account directly in the store.
    pub async fn remove_user(&self, user: User) {
        self.users.delete(user).await.unwrap();
    }
}
