//! Comment handlers.

use actix_web::{HttpResponse, web};

use sns_core::domain::{Comment, CommentId, PostId};
use sns_shared::ApiResponse;
use sns_shared::dto::{CommentRequest, CommentResponse, PageQuery};

use super::{page_request, page_response, require};
use crate::middleware::auth::BearerToken;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(comment: Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id.get(),
        comment: comment.comment,
        user_id: comment.user_id.get(),
        post_id: comment.post_id.get(),
        registered_at: comment.registered_at,
        updated_at: comment.updated_at,
    }
}

/// POST /api/v1/posts/{id}/comments
pub async fn create(
    state: web::Data<AppState>,
    token: BearerToken,
    path: web::Path<i64>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    require("comment", &req.comment)?;

    let comment = state
        .comments
        .create(token.as_str(), PostId(path.into_inner()), &req.comment)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(to_response(comment))))
}

/// GET /api/v1/posts/{id}/comments?page=&size=
pub async fn list(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = state
        .comments
        .list(PostId(path.into_inner()), page_request(&query))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(page_response(page, to_response))))
}

/// PUT /api/v1/comments/{id}
pub async fn modify(
    state: web::Data<AppState>,
    token: BearerToken,
    path: web::Path<i64>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    require("comment", &req.comment)?;

    let comment = state
        .comments
        .modify(token.as_str(), CommentId(path.into_inner()), &req.comment)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(comment))))
}

/// DELETE /api/v1/comments/{id}
pub async fn delete(
    state: web::Data<AppState>,
    token: BearerToken,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    state
        .comments
        .delete(token.as_str(), CommentId(path.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::done("Comment deleted")))
}
