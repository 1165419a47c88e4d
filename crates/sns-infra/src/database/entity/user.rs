//! User entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use sns_core::domain::{NewUser, UserId, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_name: String,
    pub password: String,
    pub role: String,
    pub registered_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
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

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for sns_core::domain::User {
    fn from(model: Model) -> Self {
        let role = model.role.parse::<UserRole>().unwrap_or_else(|e| {
            tracing::warn!(user_id = model.id, error = %e, "Falling back to USER role");
            UserRole::default()
        });

        Self {
            id: UserId(model.id),
            user_name: model.user_name,
            password_hash: model.password,
            role,
            registered_at: model.registered_at.into(),
            updated_at: model.updated_at.into(),
            deleted_at: model.deleted_at.map(Into::into),
        }
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<sns_core::domain::User> for ActiveModel {
    fn from(user: sns_core::domain::User) -> Self {
        Self {
            id: Set(user.id.get()),
            user_name: Set(user.user_name),
            password: Set(user.password_hash),
            role: Set(user.role.as_str().to_string()),
            registered_at: Set(user.registered_at.into()),
            updated_at: Set(user.updated_at.into()),
            deleted_at: Set(user.deleted_at.map(Into::into)),
        }
    }
}

/// Conversion from a not-yet-stored user; the database assigns the id.
impl From<NewUser> for ActiveModel {
    fn from(user: NewUser) -> Self {
        Self {
            id: NotSet,
            user_name: Set(user.user_name),
            password: Set(user.password_hash),
            role: Set(user.role.as_str().to_string()),
            registered_at: Set(user.registered_at.into()),
            updated_at: Set(user.registered_at.into()),
            deleted_at: Set(None),
        }
    }
}
