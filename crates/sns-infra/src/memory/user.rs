use async_trait::async_trait;

use sns_core::domain::{NewUser, User, UserId};
use sns_core::error::RepoError;
use sns_core::ports::{BaseRepository, UserRepository};

use super::table::Table;

/// In-memory credential store.
///
/// User names stay reserved after an account is deleted, matching the unique column in PostgreSQL.
pub struct InMemoryUserRepository {
    table: Table<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, NewUser, UserId> for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError> {
        Ok(self.table.find(id.get()).await)
    }

    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        let user_name = user.user_name.clone();
        self.table
            .insert(
                |existing| existing.user_name == user_name,
                |id| user.into_user(UserId(id)),
            )
            .await
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        self.table.update(user.id.get(), user).await
    }

    async fn delete(&self, user: User) -> Result<(), RepoError> {
        self.table.soft_delete(user.id.get()).await
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_name = %user_name, "Finding user by name");
        Ok(self
            .table
            .find_where(|user| user.user_name == user_name)
            .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();

        let alice = repo.create(NewUser::new("alice", "h".into())).await.unwrap();
        let bob = repo.create(NewUser::new("bob", "h".into())).await.unwrap();

        assert!(bob.id > alice.id);
    }

    #[tokio::test]
    async fn test_deleted_user_is_invisible_but_name_stays_taken() {
        let repo = InMemoryUserRepository::new();
        let alice = repo.create(NewUser::new("alice", "h".into())).await.unwrap();

        repo.delete(alice.clone()).await.unwrap();

        assert!(repo.find_by_user_name("alice").await.unwrap().is_none());
        assert!(repo.find_by_id(alice.id).await.unwrap().is_none());
        assert!(matches!(
            repo.create(NewUser::new("alice", "h".into())).await,
            Err(RepoError::Constraint(_))
        ));
    }
}
