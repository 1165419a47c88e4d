use async_trait::async_trait;

use sns_core::domain::{Like, LikeId, NewLike, PostId, UserId};
use sns_core::error::RepoError;
use sns_core::ports::LikeRepository;

use super::table::Table;

/// In-memory like store. One row per (user, post).
pub struct InMemoryLikeRepository {
    table: Table<Like>,
}

impl InMemoryLikeRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryLikeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn find_by_user_and_post(
        &self,
        user_id: UserId,
        post_id: PostId,
    ) -> Result<Option<Like>, RepoError> {
        Ok(self
            .table
            .find_where(|like| like.user_id == user_id && like.post_id == post_id)
            .await)
    }

    async fn create(&self, like: NewLike) -> Result<Like, RepoError> {
        let (user_id, post_id) = (like.user_id, like.post_id);
        self.table
            .insert(
                |existing| existing.user_id == user_id && existing.post_id == post_id,
                |id| like.into_like(LikeId(id)),
            )
            .await
    }

    async fn count_by_post(&self, post_id: PostId) -> Result<u64, RepoError> {
        Ok(self.table.count_where(|like| like.post_id == post_id).await)
    }
}
