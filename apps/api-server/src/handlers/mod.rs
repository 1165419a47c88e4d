//! HTTP handlers and route configuration.

mod comments;
mod health;
mod likes;
mod posts;
mod users;

#[cfg(test)]
mod tests;

use actix_web::web;

use sns_core::domain::{Page, PageRequest};
use sns_shared::dto::{PageQuery, PageResponse};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/v1")
                    .service(
                        web::scope("/users")
                            .route("/join", web::post().to(users::join))
                            .route("/login", web::post().to(users::login))
                            .route("/me", web::get().to(users::me)),
                    )
                    .service(
                        web::scope("/posts")
                            .route("", web::post().to(posts::create))
                            .route("", web::get().to(posts::feed))
                            // before /{id} so "my" is not taken for an id
                            .route("/my", web::get().to(posts::my_feed))
                            .route("/{id}", web::get().to(posts::find))
                            .route("/{id}", web::put().to(posts::modify))
                            .route("/{id}", web::delete().to(posts::delete))
                            .route("/{id}/comments", web::post().to(comments::create))
                            .route("/{id}/comments", web::get().to(comments::list))
                            .route("/{id}/likes", web::post().to(likes::like))
                            .route("/{id}/likes", web::get().to(likes::count)),
                    )
                    .service(
                        web::scope("/comments")
                            .route("/{id}", web::put().to(comments::modify))
                            .route("/{id}", web::delete().to(comments::delete)),
                    ),
            ),
    );
}

fn page_request(query: &PageQuery) -> PageRequest {
    PageRequest::new(
        query.page.unwrap_or(1),
        query.size.unwrap_or(PageRequest::DEFAULT_SIZE),
    )
}

fn page_response<T, U>(page: Page<T>, f: impl FnMut(T) -> U) -> PageResponse<U> {
    let total_pages = page.total_pages();
    let page = page.map(f);

    PageResponse {
        items: page.items,
        page: page.page,
        size: page.size,
        total: page.total,
        total_pages,
    }
}

/// Reject blank required fields before they reach the services.
fn require(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be blank")));
    }
    Ok(())
}
