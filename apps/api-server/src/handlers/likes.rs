//! Like handlers.

use actix_web::{HttpResponse, web};

use sns_core::domain::PostId;
use sns_shared::ApiResponse;
use sns_shared::dto::LikeCountResponse;

use crate::middleware::auth::BearerToken;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/posts/{id}/likes
pub async fn like(
    state: web::Data<AppState>,
    token: BearerToken,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    state
        .likes
        .like(token.as_str(), PostId(path.into_inner()))
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::done("Post liked")))
}

/// GET /api/v1/posts/{id}/likes
pub async fn count(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let post_id = PostId(path.into_inner());
    let count = state.likes.count(post_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(LikeCountResponse {
        post_id: post_id.get(),
        count,
    })))
}
