//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use sns_core::domain::{NewPost, PostId, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub registered_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl super::SoftDeleteEntity for Entity {
    fn deleted_at_column() -> Column {
        Column::DeletedAt
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for sns_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: PostId(model.id),
            owner_id: UserId(model.user_id),
            title: model.title,
            body: model.body,
            registered_at: model.registered_at.into(),
            updated_at: model.updated_at.into(),
            deleted_at: model.deleted_at.map(Into::into),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<sns_core::domain::Post> for ActiveModel {
    fn from(post: sns_core::domain::Post) -> Self {
        Self {
            id: Set(post.id.get()),
            user_id: Set(post.owner_id.get()),
            title: Set(post.title),
            body: Set(post.body),
            registered_at: Set(post.registered_at.into()),
            updated_at: Set(post.updated_at.into()),
            deleted_at: Set(post.deleted_at.map(Into::into)),
        }
    }
}

impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            user_id: Set(post.owner_id.get()),
            title: Set(post.title),
            body: Set(post.body),
            registered_at: Set(post.registered_at.into()),
            updated_at: Set(post.registered_at.into()),
            deleted_at: Set(None),
        }
    }
}
