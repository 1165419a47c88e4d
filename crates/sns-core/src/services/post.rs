use std::sync::Arc;

use crate::domain::{NewPost, Page, PageRequest, Post, PostId, User};
use crate::error::DomainError;
use crate::ports::PostRepository;

use super::{Authenticator, find_visible_post};

/// Post creation, ownership-checked mutation and feed listing.
#[derive(Clone)]
pub struct PostService {
    authenticator: Authenticator,
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(authenticator: Authenticator, posts: Arc<dyn PostRepository>) -> Self {
        Self {
            authenticator,
            posts,
        }
    }

    pub async fn create(&self, token: &str, title: &str, body: &str) -> Result<Post, DomainError> {
        let caller = self.authenticator.caller(token).await?;

        let post = self
            .posts
            .create(NewPost::new(caller.id, title.to_string(), body.to_string()))
            .await?;

        tracing::info!(post_id = %post.id, owner = %caller.user_name, "Post created");
        Ok(post)
    }

    /// Replace title and body. Only the owner may do this.
    pub async fn modify(
        &self,
        token: &str,
        post_id: PostId,
        title: &str,
        body: &str,
    ) -> Result<Post, DomainError> {
        let caller = self.authenticator.caller(token).await?;
        let mut post = self.owned_post(&caller, post_id).await?;

        post.revise(title.to_string(), body.to_string());
        let post = self
            .posts
            .save(post)
            .await
            .map_err(DomainError::on_mutation("Post", post_id.get()))?;

        tracing::info!(post_id = %post.id, owner = %caller.user_name, "Post modified");
        Ok(post)
    }

    /// Soft-delete a post. Only the owner may do this; a second delete reports not found.
    pub async fn delete(&self, token: &str, post_id: PostId) -> Result<(), DomainError> {
        let caller = self.authenticator.caller(token).await?;
        let post = self.owned_post(&caller, post_id).await?;

        self.posts
            .delete(post)
            .await
            .map_err(DomainError::on_mutation("Post", post_id.get()))?;

        tracing::info!(post_id = %post_id, owner = %caller.user_name, "Post deleted");
        Ok(())
    }

    pub async fn find(&self, post_id: PostId) -> Result<Post, DomainError> {
        find_visible_post(self.posts.as_ref(), post_id).await
    }

    /// Every active post, newest first.
    pub async fn feed(&self, page: PageRequest) -> Result<Page<Post>, DomainError> {
        Ok(self.posts.list_all(page).await?)
    }

    /// The caller's own active posts, newest first.
    pub async fn my_feed(&self, token: &str, page: PageRequest) -> Result<Page<Post>, DomainError> {
        let caller = self.authenticator.caller(token).await?;
        Ok(self.posts.list_by_owner(caller.id, page).await?)
    }

    async fn owned_post(&self, caller: &User, post_id: PostId) -> Result<Post, DomainError> {
        let post = find_visible_post(self.posts.as_ref(), post_id).await?;

        if !post.is_owned_by(caller.id) {
            tracing::warn!(
                post_id = %post_id,
                caller = %caller.user_name,
                "Post mutation denied: caller is not the owner"
            );
            return Err(DomainError::PermissionDenied {
                user_name: caller.user_name.clone(),
                entity_type: "Post",
                id: post_id.get(),
            });
        }

        Ok(post)
    }
}
