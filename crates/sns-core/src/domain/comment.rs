use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CommentId, PostId, SoftDelete, UserId};

/// Comment entity - text left on a post by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub post_id: PostId,
    pub comment: String,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn is_written_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    pub fn revise(&mut self, comment: String) {
        self.comment = comment;
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

impl SoftDelete for Comment {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.deleted_at = Some(at);
        self.updated_at = at.max(self.updated_at);
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub user_id: UserId,
    pub post_id: PostId,
    pub comment: String,
    pub registered_at: DateTime<Utc>,
}

impl NewComment {
    pub fn new(user_id: UserId, post_id: PostId, comment: String) -> Self {
        Self {
            user_id,
            post_id,
            comment,
            registered_at: Utc::now(),
        }
    }

    pub fn into_comment(self, id: CommentId) -> Comment {
        Comment {
            id,
            user_id: self.user_id,
            post_id: self.post_id,
            comment: self.comment,
            registered_at: self.registered_at,
            updated_at: self.registered_at,
            deleted_at: None,
        }
    }
}
