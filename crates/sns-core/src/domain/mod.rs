//! Domain entities - the core business objects.

mod comment;
mod id;
mod like;
mod page;
mod post;
mod soft_delete;
mod user;

pub use comment::{Comment, NewComment};
pub use id::{CommentId, LikeId, PostId, UserId};
pub use like::{Like, NewLike};
pub use page::{Page, PageRequest};
pub use post::{NewPost, Post};
pub use soft_delete::SoftDelete;
pub use user::{NewUser, User, UserRole};
