//! Account handlers.

use actix_web::{HttpResponse, web};

use sns_core::domain::User;
use sns_shared::ApiResponse;
use sns_shared::dto::{LoginRequest, LoginResponse, UserJoinRequest, UserResponse};

use super::require;
use crate::middleware::auth::BearerToken;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id.get(),
        user_name: user.user_name,
        role: user.role.to_string(),
        registered_at: user.registered_at,
    }
}

/// POST /api/v1/users/join
pub async fn join(
    state: web::Data<AppState>,
    body: web::Json<UserJoinRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    require("user_name", &req.user_name)?;
    require("password", &req.password)?;

    let user = state.auth.join(&req.user_name, &req.password).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        to_response(user),
        "User joined",
    )))
}

/// POST /api/v1/users/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    require("user_name", &req.user_name)?;
    require("password", &req.password)?;

    let issued = state.auth.login(&req.user_name, &req.password).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(LoginResponse::bearer(
        issued.access_token,
        issued.expires_in.num_seconds(),
    ))))
}

/// GET /api/v1/users/me
pub async fn me(state: web::Data<AppState>, token: BearerToken) -> AppResult<HttpResponse> {
    let user = state.auth.authenticate(token.as_str()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(user))))
}
