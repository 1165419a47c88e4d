//! In-memory repositories - used when no database is configured, and by the service test suites.
//!
//! Note: Data is lost on process restart.

mod table;

mod comment;
mod like;
mod post;
mod user;

pub use comment::InMemoryCommentRepository;
pub use like::InMemoryLikeRepository;
pub use post::InMemoryPostRepository;
pub use user::InMemoryUserRepository;
