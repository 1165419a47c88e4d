//! Application services - the identity and ownership rules.
//!
//! Services receive their stores and crypto adapters as explicit constructor arguments.
//! Every mutating call runs the same sequence and stops at the first failure:
//! resolve the caller from the token, load the caller's active account, load the target
//! through the soft-delete filter, compare owner keys, then mutate.

mod auth;
mod authenticator;
mod comment;
mod like;
mod post;

pub use auth::{AuthService, IssuedToken};
pub use authenticator::Authenticator;
pub use comment::CommentService;
pub use like::LikeService;
pub use post::PostService;

use crate::domain::{Post, PostId};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Load an active post or fail with `ResourceNotFound`.
pub(crate) async fn find_visible_post(
    posts: &dyn PostRepository,
    post_id: PostId,
) -> Result<Post, DomainError> {
    posts
        .find_by_id(post_id)
        .await?
        .ok_or(DomainError::ResourceNotFound {
            entity_type: "Post",
            id: post_id.get(),
        })
}
