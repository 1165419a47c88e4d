use async_trait::async_trait;

use sns_core::domain::{Comment, CommentId, NewComment, Page, PageRequest, PostId};
use sns_core::error::RepoError;
use sns_core::ports::{BaseRepository, CommentRepository};

use super::table::Table;

/// In-memory comment store.
pub struct InMemoryCommentRepository {
    table: Table<Comment>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Comment, NewComment, CommentId> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, RepoError> {
        Ok(self.table.find(id.get()).await)
    }

    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError> {
        self.table
            .insert(|_| false, |id| comment.into_comment(CommentId(id)))
            .await
    }

    async fn save(&self, comment: Comment) -> Result<Comment, RepoError> {
        self.table.update(comment.id.get(), comment).await
    }

    async fn delete(&self, comment: Comment) -> Result<(), RepoError> {
        self.table.soft_delete(comment.id.get()).await
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn list_by_post(
        &self,
        post_id: PostId,
        page: PageRequest,
    ) -> Result<Page<Comment>, RepoError> {
        Ok(self
            .table
            .page_where(
                |comment| comment.post_id == post_id,
                |comment| (comment.registered_at, comment.id),
                page,
            )
            .await)
    }
}
