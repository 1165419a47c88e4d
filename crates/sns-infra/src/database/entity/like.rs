//! Like entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use sns_core::domain::{LikeId, NewLike, PostId, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "likes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub post_id: i64,
    pub registered_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl super::SoftDeleteEntity for Entity {
    fn deleted_at_column() -> Column {
        Column::DeletedAt
    }
}

impl From<Model> for sns_core::domain::Like {
    fn from(model: Model) -> Self {
        Self {
            id: LikeId(model.id),
            user_id: UserId(model.user_id),
            post_id: PostId(model.post_id),
            registered_at: model.registered_at.into(),
            deleted_at: model.deleted_at.map(Into::into),
        }
    }
}

impl From<NewLike> for ActiveModel {
    fn from(like: NewLike) -> Self {
        Self {
            id: NotSet,
            user_id: Set(like.user_id.get()),
            post_id: Set(like.post_id.get()),
            registered_at: Set(like.registered_at.into()),
            deleted_at: Set(None),
        }
    }
}
