//! Comment entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use sns_core::domain::{CommentId, NewComment, PostId, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub post_id: i64,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub registered_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
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

impl From<Model> for sns_core::domain::Comment {
    fn from(model: Model) -> Self {
        Self {
            id: CommentId(model.id),
            user_id: UserId(model.user_id),
            post_id: PostId(model.post_id),
            comment: model.comment,
            registered_at: model.registered_at.into(),
            updated_at: model.updated_at.into(),
            deleted_at: model.deleted_at.map(Into::into),
        }
    }
}

impl From<sns_core::domain::Comment> for ActiveModel {
    fn from(comment: sns_core::domain::Comment) -> Self {
        Self {
            id: Set(comment.id.get()),
            user_id: Set(comment.user_id.get()),
            post_id: Set(comment.post_id.get()),
            comment: Set(comment.comment),
            registered_at: Set(comment.registered_at.into()),
            updated_at: Set(comment.updated_at.into()),
            deleted_at: Set(comment.deleted_at.map(Into::into)),
        }
    }
}

impl From<NewComment> for ActiveModel {
    fn from(comment: NewComment) -> Self {
        Self {
            id: NotSet,
            user_id: Set(comment.user_id.get()),
            post_id: Set(comment.post_id.get()),
            comment: Set(comment.comment),
            registered_at: Set(comment.registered_at.into()),
            updated_at: Set(comment.registered_at.into()),
            deleted_at: Set(None),
        }
    }
}
