//! Application state - shared across all handlers.

use std::sync::Arc;

use sns_core::ports::{
    CommentRepository, LikeRepository, PasswordService, PostRepository, TokenService,
    UserRepository,
};
use sns_core::services::{AuthService, CommentService, LikeService, PostService};
use sns_infra::{
    Argon2PasswordService, InMemoryCommentRepository, InMemoryLikeRepository,
    InMemoryPostRepository, InMemoryUserRepository, JwtConfig, JwtTokenService,
};

#[cfg(feature = "postgres")]
use sns_infra::{
    DatabaseConfig, DatabaseConnections, PostgresCommentRepository, PostgresLikeRepository,
    PostgresPostRepository, PostgresUserRepository,
};

/// The four stores the services run on.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub likes: Arc<dyn LikeRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
            likes: Arc::new(InMemoryLikeRepository::new()),
        }
    }

    /// Connect, apply pending migrations and build the SeaORM stores.
    #[cfg(feature = "postgres")]
    pub async fn postgres(config: &DatabaseConfig) -> Result<Self, sea_orm::DbErr> {
        use migration::{Migrator, MigratorTrait};

        let connections = DatabaseConnections::init(config).await?;
        let db = connections.main;

        Migrator::up(&db, None).await?;
        tracing::info!("Database schema is up to date");

        Ok(Self {
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            comments: Arc::new(PostgresCommentRepository::new(db.clone())),
            likes: Arc::new(PostgresLikeRepository::new(db)),
        })
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub posts: PostService,
    pub comments: CommentService,
    pub likes: LikeService,
}

impl AppState {
    /// Wire the services over the given stores.
    pub fn new(repos: Repositories, jwt: JwtConfig) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(jwt));
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        let auth = AuthService::new(repos.users, passwords, tokens);
        let authenticator = auth.authenticator().clone();

        tracing::info!("Application state initialized");

        Self {
            posts: PostService::new(authenticator.clone(), repos.posts.clone()),
            comments: CommentService::new(
                authenticator.clone(),
                repos.posts.clone(),
                repos.comments,
            ),
            likes: LikeService::new(authenticator, repos.posts, repos.likes),
            auth,
        }
    }
}
