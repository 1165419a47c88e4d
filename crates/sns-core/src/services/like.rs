use std::sync::Arc;

use crate::domain::{Like, NewLike, PostId};
use crate::error::{DomainError, RepoError};
use crate::ports::{LikeRepository, PostRepository};

use super::{Authenticator, find_visible_post};

/// Likes on posts.
#[derive(Clone)]
pub struct LikeService {
    authenticator: Authenticator,
    posts: Arc<dyn PostRepository>,
    likes: Arc<dyn LikeRepository>,
}

impl LikeService {
    pub fn new(
        authenticator: Authenticator,
        posts: Arc<dyn PostRepository>,
        likes: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            authenticator,
            posts,
            likes,
        }
    }

    /// Like an active post once.
    pub async fn like(&self, token: &str, post_id: PostId) -> Result<Like, DomainError> {
        let caller = self.authenticator.caller(token).await?;
        let post = find_visible_post(self.posts.as_ref(), post_id).await?;

        let already_liked = || DomainError::AlreadyLiked {
            user_name: caller.user_name.clone(),
            post_id: post.id.get(),
        };

        if self
            .likes
            .find_by_user_and_post(caller.id, post.id)
            .await?
            .is_some()
        {
            return Err(already_liked());
        }

        let like = self
            .likes
            .create(NewLike::new(caller.id, post.id))
            .await
            .map_err(|e| match e {
                RepoError::Constraint(_) => already_liked(),
                other => DomainError::Repository(other),
            })?;

        tracing::info!(post_id = %post.id, user = %caller.user_name, "Post liked");
        Ok(like)
    }

    /// Number of active likes on an active post.
    pub async fn count(&self, post_id: PostId) -> Result<u64, DomainError> {
        let post = find_visible_post(self.posts.as_ref(), post_id).await?;
        Ok(self.likes.count_by_post(post.id).await?)
    }
}
