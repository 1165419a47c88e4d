use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LikeId, PostId, SoftDelete, UserId};

/// A user's like on a post. At most one active like per (user, post).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub id: LikeId,
    pub user_id: UserId,
    pub post_id: PostId,
    pub registered_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl SoftDelete for Like {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.deleted_at = Some(at);
    }
}

#[derive(Debug, Clone)]
pub struct NewLike {
    pub user_id: UserId,
    pub post_id: PostId,
    pub registered_at: DateTime<Utc>,
}

impl NewLike {
    pub fn new(user_id: UserId, post_id: PostId) -> Self {
        Self {
            user_id,
            post_id,
            registered_at: Utc::now(),
        }
    }

    pub fn into_like(self, id: LikeId) -> Like {
        Like {
            id,
            user_id: self.user_id,
            post_id: self.post_id,
            registered_at: self.registered_at,
            deleted_at: None,
        }
    }
}
