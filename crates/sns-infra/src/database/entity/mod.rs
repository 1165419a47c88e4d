//! SeaORM entities. Every table carries a nullable `deleted_at` column.

pub mod comment;
pub mod like;
pub mod post;
pub mod user;

/// Entities whose rows are soft-deleted through a `deleted_at` column.
pub trait SoftDeleteEntity: sea_orm::EntityTrait {
    fn deleted_at_column() -> Self::Column;
}
