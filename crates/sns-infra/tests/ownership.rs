//! Ownership checks and soft-delete visibility across posts, comments and likes.

mod common;

use common::TestApp;
use sns_core::domain::{PageRequest, PostId};
use sns_core::{DomainError, ErrorKind};

#[tokio::test]
async fn test_post_lifecycle_between_two_users() {
    let app = TestApp::new();
    let (alice, alice_token) = app.sign_up("alice", "pw1").await;
    let (_, bob_token) = app.sign_up("bob", "pw2").await;

    let post = app.posts.create(&alice_token, "T", "B").await.unwrap();
    assert_eq!(post.owner_id, alice.id);

    let modified = app
        .posts
        .modify(&alice_token, post.id, "T2", "B2")
        .await
        .unwrap();
    assert_eq!(modified.title, "T2");
    assert!(modified.updated_at >= post.updated_at);

    let err = app
        .posts
        .modify(&bob_token, post.id, "X", "Y")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::PermissionDenied { ref user_name, entity_type: "Post", .. } if user_name == "bob"
    ));

    let unchanged = app.posts.find(post.id).await.unwrap();
    assert_eq!(unchanged.title, "T2");
    assert_eq!(unchanged.body, "B2");

    app.posts.delete(&alice_token, post.id).await.unwrap();

    assert_eq!(
        app.posts.find(post.id).await.unwrap_err().kind(),
        ErrorKind::ResourceNotFound
    );
}

#[tokio::test]
async fn test_non_owner_cannot_delete() {
    let app = TestApp::new();
    let (_, alice_token) = app.sign_up("alice", "pw1").await;
    let (_, bob_token) = app.sign_up("bob", "pw2").await;

    let post = app.posts.create(&alice_token, "T", "B").await.unwrap();

    let err = app.posts.delete(&bob_token, post.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);

    assert!(app.posts.find(post.id).await.is_ok());
}

#[tokio::test]
async fn test_second_delete_is_not_found() {
    let app = TestApp::new();
    let (_, token) = app.sign_up("alice", "pw1").await;

    let post = app.posts.create(&token, "T", "B").await.unwrap();
    app.posts.delete(&token, post.id).await.unwrap();

    let err = app.posts.delete(&token, post.id).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ResourceNotFound { entity_type: "Post", id } if id == post.id.get()
    ));
}

#[tokio::test]
async fn test_missing_post_is_checked_before_ownership() {
    let app = TestApp::new();
    let (_, token) = app.sign_up("bob", "pw2").await;

    let err = app
        .posts
        .modify(&token, PostId(999), "T", "B")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
}

#[tokio::test]
async fn test_invalid_token_is_checked_first() {
    let app = TestApp::new();
    let (_, token) = app.sign_up("alice", "pw1").await;
    let post = app.posts.create(&token, "T", "B").await.unwrap();

    let err = app
        .posts
        .modify("garbage", post.id, "X", "Y")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
}

#[tokio::test]
async fn test_deleted_posts_leave_feeds() {
    let app = TestApp::new();
    let (_, alice_token) = app.sign_up("alice", "pw1").await;
    let (_, bob_token) = app.sign_up("bob", "pw2").await;

    let first = app.posts.create(&alice_token, "first", "B").await.unwrap();
    let second = app.posts.create(&alice_token, "second", "B").await.unwrap();
    app.posts.create(&bob_token, "bob's", "B").await.unwrap();

    app.posts.delete(&alice_token, first.id).await.unwrap();

    let feed = app.posts.feed(PageRequest::default()).await.unwrap();
    assert_eq!(feed.total, 2);
    assert!(feed.items.iter().all(|p| p.id != first.id));

    let mine = app
        .posts
        .my_feed(&alice_token, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(mine.total, 1);
    assert_eq!(mine.items[0].id, second.id);
}

#[tokio::test]
async fn test_feed_is_newest_first_and_paged() {
    let app = TestApp::new();
    let (_, token) = app.sign_up("alice", "pw1").await;

    for i in 0..5 {
        app.posts
            .create(&token, &format!("post {i}"), "B")
            .await
            .unwrap();
    }

    let page = app.posts.feed(PageRequest::new(1, 2)).await.unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.items[0].title, "post 4");
    assert_eq!(page.items[1].title, "post 3");

    let last = app.posts.feed(PageRequest::new(3, 2)).await.unwrap();
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].title, "post 0");
}

#[tokio::test]
async fn test_only_the_author_modifies_a_comment() {
    let app = TestApp::new();
    let (_, alice_token) = app.sign_up("alice", "pw1").await;
    let (bob, bob_token) = app.sign_up("bob", "pw2").await;

    let post = app.posts.create(&alice_token, "T", "B").await.unwrap();
    let comment = app
        .comments
        .create(&bob_token, post.id, "nice")
        .await
        .unwrap();
    assert_eq!(comment.user_id, bob.id);

    // the post owner does not own the comment
    let err = app
        .comments
        .modify(&alice_token, comment.id, "edited")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::PermissionDenied { entity_type: "Comment", .. }
    ));

    let edited = app
        .comments
        .modify(&bob_token, comment.id, "very nice")
        .await
        .unwrap();
    assert_eq!(edited.comment, "very nice");

    assert_eq!(
        app.comments
            .delete(&alice_token, comment.id)
            .await
            .unwrap_err()
            .kind(),
        ErrorKind::PermissionDenied
    );
    app.comments.delete(&bob_token, comment.id).await.unwrap();

    let listed = app
        .comments
        .list(post.id, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(listed.total, 0);
}

#[tokio::test]
async fn test_comments_on_deleted_post_are_unreachable() {
    let app = TestApp::new();
    let (_, token) = app.sign_up("alice", "pw1").await;

    let post = app.posts.create(&token, "T", "B").await.unwrap();
    let comment = app.comments.create(&token, post.id, "first").await.unwrap();

    app.posts.delete(&token, post.id).await.unwrap();

    assert_eq!(
        app.comments
            .list(post.id, PageRequest::default())
            .await
            .unwrap_err()
            .kind(),
        ErrorKind::ResourceNotFound
    );
    assert_eq!(
        app.comments
            .modify(&token, comment.id, "edit")
            .await
            .unwrap_err()
            .kind(),
        ErrorKind::ResourceNotFound
    );
    assert_eq!(
        app.comments
            .create(&token, post.id, "late")
            .await
            .unwrap_err()
            .kind(),
        ErrorKind::ResourceNotFound
    );
}

#[tokio::test]
async fn test_user_likes_a_post_once() {
    let app = TestApp::new();
    let (_, alice_token) = app.sign_up("alice", "pw1").await;
    let (_, bob_token) = app.sign_up("bob", "pw2").await;

    let post = app.posts.create(&alice_token, "T", "B").await.unwrap();

    app.likes.like(&bob_token, post.id).await.unwrap();
    app.likes.like(&alice_token, post.id).await.unwrap();

    let err = app.likes.like(&bob_token, post.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyLiked);

    assert_eq!(app.likes.count(post.id).await.unwrap(), 2);
}

#[tokio::test]
async fn test_likes_on_deleted_post_are_unreachable() {
    let app = TestApp::new();
    let (_, token) = app.sign_up("alice", "pw1").await;

    let post = app.posts.create(&token, "T", "B").await.unwrap();
    app.likes.like(&token, post.id).await.unwrap();
    app.posts.delete(&token, post.id).await.unwrap();

    assert_eq!(
        app.likes.count(post.id).await.unwrap_err().kind(),
        ErrorKind::ResourceNotFound
    );
    assert_eq!(
        app.likes.like(&token, post.id).await.unwrap_err().kind(),
        ErrorKind::ResourceNotFound
    );
}
