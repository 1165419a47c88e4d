//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, PaginatorTrait, QueryFilter, QueryOrder};

use sns_core::domain::{
    Comment, Like, NewLike, Page, PageRequest, Post, PostId, User, UserId,
};
use sns_core::error::RepoError;
use sns_core::ports::{CommentRepository, LikeRepository, PostRepository, UserRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::like::{self, Entity as LikeEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// PostgreSQL like repository.
pub type PostgresLikeRepository = PostgresBaseRepository<LikeEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_name = %user_name, "Finding user by name");

        let result = Self::active()
            .filter(user::Column::UserName.eq(user_name))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_all(&self, page: PageRequest) -> Result<Page<Post>, RepoError> {
        let query = Self::active()
            .order_by_desc(post::Column::RegisteredAt)
            .order_by_desc(post::Column::Id);

        self.fetch_page(query, page).await
    }

    async fn list_by_owner(
        &self,
        owner_id: UserId,
        page: PageRequest,
    ) -> Result<Page<Post>, RepoError> {
        let query = Self::active()
            .filter(post::Column::UserId.eq(owner_id.get()))
            .order_by_desc(post::Column::RegisteredAt)
            .order_by_desc(post::Column::Id);

        self.fetch_page(query, page).await
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list_by_post(
        &self,
        post_id: PostId,
        page: PageRequest,
    ) -> Result<Page<Comment>, RepoError> {
        let query = Self::active()
            .filter(comment::Column::PostId.eq(post_id.get()))
            .order_by_desc(comment::Column::RegisteredAt)
            .order_by_desc(comment::Column::Id);

        self.fetch_page(query, page).await
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn find_by_user_and_post(
        &self,
        user_id: UserId,
        post_id: PostId,
    ) -> Result<Option<Like>, RepoError> {
        let result = Self::active()
            .filter(like::Column::UserId.eq(user_id.get()))
            .filter(like::Column::PostId.eq(post_id.get()))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, new_like: NewLike) -> Result<Like, RepoError> {
        let active_model: like::ActiveModel = new_like.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn count_by_post(&self, post_id: PostId) -> Result<u64, RepoError> {
        Self::active()
            .filter(like::Column::PostId.eq(post_id.get()))
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }
}
