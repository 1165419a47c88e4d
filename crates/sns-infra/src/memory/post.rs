use async_trait::async_trait;

use sns_core::domain::{NewPost, Page, PageRequest, Post, PostId, UserId};
use sns_core::error::RepoError;
use sns_core::ports::{BaseRepository, PostRepository};

use super::table::Table;

/// In-memory post store.
pub struct InMemoryPostRepository {
    table: Table<Post>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn newest_first(post: &Post) -> (chrono::DateTime<chrono::Utc>, PostId) {
    (post.registered_at, post.id)
}

#[async_trait]
impl BaseRepository<Post, NewPost, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        Ok(self.table.find(id.get()).await)
    }

    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        self.table
            .insert(|_| false, |id| post.into_post(PostId(id)))
            .await
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        self.table.update(post.id.get(), post).await
    }

    async fn delete(&self, post: Post) -> Result<(), RepoError> {
        self.table.soft_delete(post.id.get()).await
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self, page: PageRequest) -> Result<Page<Post>, RepoError> {
        Ok(self.table.page_where(|_| true, newest_first, page).await)
    }

    async fn list_by_owner(
        &self,
        owner_id: UserId,
        page: PageRequest,
    ) -> Result<Page<Post>, RepoError> {
        Ok(self
            .table
            .page_where(|post| post.owner_id == owner_id, newest_first, page)
            .await)
    }
}
