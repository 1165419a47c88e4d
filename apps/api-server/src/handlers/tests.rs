use actix_web::{App, http::StatusCode, test, web};
use chrono::TimeDelta;
use serde_json::{Value, json};

use sns_infra::JwtConfig;

use super::configure_routes;
use crate::state::{AppState, Repositories};

fn state() -> AppState {
    AppState::new(
        Repositories::in_memory(),
        JwtConfig {
            secret: "handler-test-secret".to_string(),
            token_ttl: TimeDelta::hours(1),
            issuer: "sns-test".to_string(),
        },
    )
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await
    };
}

/// Call the service and decode the JSON body.
macro_rules! send {
    ($app:expr, $req:expr $(,)?) => {{
        let res = test::call_service(&$app, $req.to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        let body: Value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, body)
    }};
}

/// Join and log in, yielding the access token.
macro_rules! sign_up {
    ($app:expr, $user_name:expr $(,)?) => {{
        let credentials = json!({ "user_name": $user_name, "password": "pw1" });

        let (status, _) = send!(
            $app,
            test::TestRequest::post()
                .uri("/api/v1/users/join")
                .set_json(&credentials)
        );
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send!(
            $app,
            test::TestRequest::post()
                .uri("/api/v1/users/login")
                .set_json(&credentials)
        );
        assert_eq!(status, StatusCode::OK);

        body["data"]["access_token"].as_str().unwrap().to_string()
    }};
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn test_health() {
    let app = app!();

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/health"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_join_login_me() {
    let app = app!();
    let token = sign_up!(app, "alice");

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/users/me")
            .insert_header(bearer(&token))
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user_name"], "alice");
    assert_eq!(body["data"]["role"], "USER");
    assert!(body["data"].get("password").is_none());
}

#[actix_web::test]
async fn test_duplicate_join_is_conflict() {
    let app = app!();
    sign_up!(app, "alice");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/users/join")
            .set_json(json!({ "user_name": "alice", "password": "other" }))
    );

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);
    assert_eq!(body["title"], "Conflict");
}

#[actix_web::test]
async fn test_login_failures() {
    let app = app!();
    sign_up!(app, "alice");

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/users/login")
            .set_json(json!({ "user_name": "alice", "password": "wrong" }))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/users/login")
            .set_json(json!({ "user_name": "nobody", "password": "pw1" }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_blank_fields_are_bad_requests() {
    let app = app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/users/join")
            .set_json(json!({ "user_name": "  ", "password": "pw1" }))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "user_name must not be blank");
}

#[actix_web::test]
async fn test_missing_or_bad_token_is_unauthorized() {
    let app = app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/posts")
            .set_json(json!({ "title": "T", "body": "B" }))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], 401);

    let (status, _) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/users/me")
            .insert_header(bearer("not-a-token"))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_post_ownership_over_http() {
    let app = app!();
    let alice = sign_up!(app, "alice");
    let bob = sign_up!(app, "bob");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/posts")
            .insert_header(bearer(&alice))
            .set_json(json!({ "title": "T", "body": "B" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let post_id = body["data"]["id"].as_i64().unwrap();
    let post_uri = format!("/api/v1/posts/{post_id}");

    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&post_uri)
            .insert_header(bearer(&bob))
            .set_json(json!({ "title": "X", "body": "Y" }))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["title"], "Forbidden");

    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&post_uri)
            .insert_header(bearer(&alice))
            .set_json(json!({ "title": "T2", "body": "B2" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "T2");

    let (status, _) = send!(
        app,
        test::TestRequest::delete()
            .uri(&post_uri)
            .insert_header(bearer(&alice))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send!(app, test::TestRequest::get().uri(&post_uri));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_feeds_are_paged() {
    let app = app!();
    let alice = sign_up!(app, "alice");
    let bob = sign_up!(app, "bob");

    for (token, title) in [(&alice, "a1"), (&bob, "b1"), (&alice, "a2")] {
        send!(
            app,
            test::TestRequest::post()
                .uri("/api/v1/posts")
                .insert_header(bearer(token))
                .set_json(json!({ "title": title, "body": "B" }))
        );
    }

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri("/api/v1/posts?page=1&size=2")
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["total_pages"], 2);
    assert_eq!(body["data"]["items"][0]["title"], "a2");

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/posts/my")
            .insert_header(bearer(&bob))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["title"], "b1");
}

#[actix_web::test]
async fn test_comments_and_likes() {
    let app = app!();
    let alice = sign_up!(app, "alice");
    let bob = sign_up!(app, "bob");

    let (_, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/posts")
            .insert_header(bearer(&alice))
            .set_json(json!({ "title": "T", "body": "B" }))
    );
    let post_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/posts/{post_id}/comments"))
            .insert_header(bearer(&bob))
            .set_json(json!({ "comment": "nice" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let comment_id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/comments/{comment_id}"))
            .insert_header(bearer(&alice))
            .set_json(json!({ "comment": "edited" }))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/v1/posts/{post_id}/comments"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"][0]["comment"], "nice");

    let likes_uri = format!("/api/v1/posts/{post_id}/likes");
    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri(&likes_uri)
            .insert_header(bearer(&bob))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri(&likes_uri)
            .insert_header(bearer(&bob))
    );
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send!(app, test::TestRequest::get().uri(&likes_uri));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 1);
}
