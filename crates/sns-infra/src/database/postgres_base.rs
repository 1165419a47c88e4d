use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QueryFilter, QuerySelect, Select, SqlErr,
};

use sns_core::domain::{Page, PageRequest, SoftDelete};
use sns_core::error::RepoError;
use sns_core::ports::BaseRepository;

use super::entity::SoftDeleteEntity;

/// Generic PostgreSQL repository implementation.
///
/// All reads go through [`PostgresBaseRepository::active`], which carries the
/// `deleted_at IS NULL` predicate.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: SoftDeleteEntity,
    E::Model: Sync,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Rows that have not been soft-deleted.
    pub(crate) fn active() -> Select<E> {
        E::find().filter(E::deleted_at_column().is_null())
    }

    /// Run `select` for one page and count the full result set.
    pub(crate) async fn fetch_page<T>(
        &self,
        select: Select<E>,
        page: PageRequest,
    ) -> Result<Page<T>, RepoError>
    where
        T: From<E::Model>,
    {
        let total = select.clone().count(&self.db).await.map_err(map_db_err)?;

        let models = select
            .offset(page.offset())
            .limit(page.size)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Page::new(
            models.into_iter().map(T::from).collect(),
            page,
            total,
        ))
    }
}

/// Translate SeaORM failures into store errors.
pub(crate) fn map_db_err(e: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(msg)) = e.sql_err() {
        return RepoError::Constraint(msg);
    }

    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => RepoError::NotFound,
        _ => RepoError::Query(e.to_string()),
    }
}

#[async_trait]
impl<E, T, New, ID> BaseRepository<T, New, ID> for PostgresBaseRepository<E>
where
    E: SoftDeleteEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i64>,
    ID: Into<i64> + Send + Sync + 'static,
    T: SoftDelete + From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
    New: Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let id: i64 = id.into();
        let result = E::find_by_id(id)
            .filter(E::deleted_at_column().is_null())
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, entity: New) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let model = self.update_active(entity.into()).await?;
        Ok(model.into())
    }

    async fn delete(&self, mut entity: T) -> Result<(), RepoError> {
        entity.mark_deleted(Utc::now());

        self.update_active(entity.into()).await?;
        Ok(())
    }
}

impl<E> PostgresBaseRepository<E>
where
    E: SoftDeleteEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send,
{
    /// Write `active_model` only while its row is still active. A row deleted in the
    /// meantime updates nothing and surfaces as `RepoError::NotFound`.
    async fn update_active(&self, active_model: E::ActiveModel) -> Result<E::Model, RepoError> {
        E::update(active_model)
            .filter(E::deleted_at_column().is_null())
            .exec(&self.db)
            .await
            .map_err(map_db_err)
    }
}
