use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PostId, SoftDelete, UserId};

/// Post entity - a feed entry written by exactly one user.
///
/// `owner_id` is fixed at creation; there is no ownership transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub owner_id: UserId,
    pub title: String,
    pub body: String,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    /// Replace title and body, refreshing `updated_at`.
    pub fn revise(&mut self, title: String, body: String) {
        self.title = title;
        self.body = body;
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

impl SoftDelete for Post {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.deleted_at = Some(at);
        self.updated_at = at.max(self.updated_at);
    }
}

/// A post that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub owner_id: UserId,
    pub title: String,
    pub body: String,
    pub registered_at: DateTime<Utc>,
}

impl NewPost {
    pub fn new(owner_id: UserId, title: String, body: String) -> Self {
        Self {
            owner_id,
            title,
            body,
            registered_at: Utc::now(),
        }
    }

    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            owner_id: self.owner_id,
            title: self.title,
            body: self.body,
            registered_at: self.registered_at,
            updated_at: self.registered_at,
            deleted_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        NewPost::new(UserId(1), "T".to_string(), "B".to_string()).into_post(PostId(10))
    }

    #[test]
    fn test_revise_moves_updated_at_forward() {
        let mut post = post();
        let before = post.updated_at;

        post.revise("T2".to_string(), "B2".to_string());

        assert_eq!(post.title, "T2");
        assert_eq!(post.body, "B2");
        assert!(post.updated_at >= before);
        assert_eq!(post.owner_id, UserId(1));
    }

    #[test]
    fn test_ownership_is_by_key() {
        let post = post();
        assert!(post.is_owned_by(UserId(1)));
        assert!(!post.is_owned_by(UserId(2)));
    }

    #[test]
    fn test_mark_deleted_hides_post() {
        let mut post = post();
        post.mark_deleted(Utc::now());
        assert!(!post.is_active());
    }
}
