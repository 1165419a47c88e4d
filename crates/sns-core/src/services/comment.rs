use std::sync::Arc;

use crate::domain::{Comment, CommentId, NewComment, Page, PageRequest, PostId, User};
use crate::error::DomainError;
use crate::ports::{CommentRepository, PostRepository};

use super::{Authenticator, find_visible_post};

/// Comments on posts. The author is the owner of a comment.
///
/// A comment is only reachable while its parent post is active.
#[derive(Clone)]
pub struct CommentService {
    authenticator: Authenticator,
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(
        authenticator: Authenticator,
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            authenticator,
            posts,
            comments,
        }
    }

    pub async fn create(
        &self,
        token: &str,
        post_id: PostId,
        comment: &str,
    ) -> Result<Comment, DomainError> {
        let caller = self.authenticator.caller(token).await?;
        let post = find_visible_post(self.posts.as_ref(), post_id).await?;

        let comment = self
            .comments
            .create(NewComment::new(caller.id, post.id, comment.to_string()))
            .await?;

        tracing::info!(
            comment_id = %comment.id,
            post_id = %post.id,
            author = %caller.user_name,
            "Comment created"
        );
        Ok(comment)
    }

    pub async fn modify(
        &self,
        token: &str,
        comment_id: CommentId,
        comment: &str,
    ) -> Result<Comment, DomainError> {
        let caller = self.authenticator.caller(token).await?;
        let mut target = self.authored_comment(&caller, comment_id).await?;

        target.revise(comment.to_string());
        let target = self
            .comments
            .save(target)
            .await
            .map_err(DomainError::on_mutation("Comment", comment_id.get()))?;

        tracing::info!(comment_id = %target.id, author = %caller.user_name, "Comment modified");
        Ok(target)
    }

    pub async fn delete(&self, token: &str, comment_id: CommentId) -> Result<(), DomainError> {
        let caller = self.authenticator.caller(token).await?;
        let target = self.authored_comment(&caller, comment_id).await?;

        self.comments
            .delete(target)
            .await
            .map_err(DomainError::on_mutation("Comment", comment_id.get()))?;

        tracing::info!(comment_id = %comment_id, author = %caller.user_name, "Comment deleted");
        Ok(())
    }

    /// Active comments on an active post, newest first.
    pub async fn list(
        &self,
        post_id: PostId,
        page: PageRequest,
    ) -> Result<Page<Comment>, DomainError> {
        let post = find_visible_post(self.posts.as_ref(), post_id).await?;
        Ok(self.comments.list_by_post(post.id, page).await?)
    }

    async fn authored_comment(
        &self,
        caller: &User,
        comment_id: CommentId,
    ) -> Result<Comment, DomainError> {
        let not_found = || DomainError::ResourceNotFound {
            entity_type: "Comment",
            id: comment_id.get(),
        };

        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or_else(not_found)?;

        // A deleted parent hides its comments too.
        if self.posts.find_by_id(comment.post_id).await?.is_none() {
            return Err(not_found());
        }

        if !comment.is_written_by(caller.id) {
            tracing::warn!(
                comment_id = %comment_id,
                caller = %caller.user_name,
                "Comment mutation denied: caller is not the author"
            );
            return Err(DomainError::PermissionDenied {
                user_name: caller.user_name.clone(),
                entity_type: "Comment",
                id: comment_id.get(),
            });
        }

        Ok(comment)
    }
}
