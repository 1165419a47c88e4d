//! Post handlers.

use actix_web::{HttpResponse, web};

use sns_core::domain::{Post, PostId};
use sns_shared::ApiResponse;
use sns_shared::dto::{PageQuery, PostCreateRequest, PostModifyRequest, PostResponse};

use super::{page_request, page_response, require};
use crate::middleware::auth::BearerToken;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.get(),
        title: post.title,
        body: post.body,
        user_id: post.owner_id.get(),
        registered_at: post.registered_at,
        updated_at: post.updated_at,
    }
}

/// POST /api/v1/posts
pub async fn create(
    state: web::Data<AppState>,
    token: BearerToken,
    body: web::Json<PostCreateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    require("title", &req.title)?;

    let post = state
        .posts
        .create(token.as_str(), &req.title, &req.body)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(to_response(post))))
}

/// PUT /api/v1/posts/{id}
pub async fn modify(
    state: web::Data<AppState>,
    token: BearerToken,
    path: web::Path<i64>,
    body: web::Json<PostModifyRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    require("title", &req.title)?;

    let post = state
        .posts
        .modify(token.as_str(), PostId(path.into_inner()), &req.title, &req.body)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    token: BearerToken,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .delete(token.as_str(), PostId(path.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::done("Post deleted")))
}

/// GET /api/v1/posts/{id}
pub async fn find(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let post = state.posts.find(PostId(path.into_inner())).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// GET /api/v1/posts?page=&size=
pub async fn feed(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = state.posts.feed(page_request(&query)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(page_response(page, to_response))))
}

/// GET /api/v1/posts/my?page=&size=
pub async fn my_feed(
    state: web::Data<AppState>,
    token: BearerToken,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = state
        .posts
        .my_feed(token.as_str(), page_request(&query))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(page_response(page, to_response))))
}
