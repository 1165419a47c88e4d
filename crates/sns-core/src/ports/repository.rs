//! Store capabilities.
//!
//! Every finder and listing here returns active records only: anything with `deleted_at` set
//! is treated as absent. `delete` stamps `deleted_at` rather than removing the row.

use async_trait::async_trait;

use crate::domain::{
    Comment, CommentId, Like, NewComment, NewLike, NewPost, NewUser, Page, PageRequest, Post,
    PostId, User, UserId,
};
use crate::error::RepoError;

/// Generic repository trait for soft-deletable entities.
#[async_trait]
pub trait BaseRepository<T, New, ID>: Send + Sync {
    /// Find an active entity by its id.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity; the store assigns the id.
    async fn create(&self, entity: New) -> Result<T, RepoError>;

    /// Persist changes to an existing entity.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Soft-delete the entity.
    async fn delete(&self, entity: T) -> Result<(), RepoError>;
}

/// Credential store.
#[async_trait]
pub trait UserRepository: BaseRepository<User, NewUser, UserId> {
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, RepoError>;
}

/// Post store. Listings are newest first.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost, PostId> {
    async fn list_all(&self, page: PageRequest) -> Result<Page<Post>, RepoError>;

    async fn list_by_owner(
        &self,
        owner_id: UserId,
        page: PageRequest,
    ) -> Result<Page<Post>, RepoError>;
}

/// Comment store. Listings are newest first.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, NewComment, CommentId> {
    async fn list_by_post(
        &self,
        post_id: PostId,
        page: PageRequest,
    ) -> Result<Page<Comment>, RepoError>;
}

/// Like store.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn find_by_user_and_post(
        &self,
        user_id: UserId,
        post_id: PostId,
    ) -> Result<Option<Like>, RepoError>;

    async fn create(&self, like: NewLike) -> Result<Like, RepoError>;

    async fn count_by_post(&self, post_id: PostId) -> Result<u64, RepoError>;
}
