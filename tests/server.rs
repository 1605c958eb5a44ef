use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use postdesk::config::SiteConfig;
use postdesk::content::{InMemoryStore, Post, PostComment};
use postdesk::server::{router, AppState};

fn posts() -> Vec<Post> {
    let mut first = Post::new("1", "Hello", "Some *markdown* body", "Alice", "2024-01-01");
    first.comments.push(PostComment::new("1", "Great post!", "bob"));
    vec![
        first,
        Post::new("2", "Second", "Another body", "Carol", "2024-02-02"),
    ]
}

fn state_with(config: SiteConfig) -> Arc<AppState> {
    let store = InMemoryStore::from_posts(posts()).unwrap();
    Arc::new(AppState::new(config, Arc::new(store)).unwrap())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_index_redirects_to_posts() {
    let app = router(state_with(SiteConfig::default()));
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/posts");
}

#[tokio::test]
async fn test_list_posts() {
    let (status, html) = send(router(state_with(SiteConfig::default())), get("/posts")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Hello"));
    assert!(html.contains("Second"));
    assert!(html.contains("/posts/edit/2"));
    assert!(html.contains("class=\"sidebar\""));
}

#[tokio::test]
async fn test_show_post_with_comments() {
    let (status, html) = send(router(state_with(SiteConfig::default())), get("/posts/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<em>markdown</em>"));
    assert!(html.contains("Great post!"));
    assert!(html.contains("Comments (1)"));
}

#[tokio::test]
async fn test_show_missing_post() {
    let (status, html) = send(router(state_with(SiteConfig::default())), get("/posts/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("No post with id"));
}

#[tokio::test]
async fn test_edit_form_is_seeded() {
    let (status, html) =
        send(router(state_with(SiteConfig::default())), get("/posts/edit/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("value=\"Hello\""));
    assert!(html.contains("value=\"Alice\""));
    assert!(html.contains("value=\"2024-01-01\""));
    assert!(html.contains("Some *markdown* body</textarea>"));
}

#[tokio::test]
async fn test_edit_form_for_missing_post_is_empty() {
    let (status, html) =
        send(router(state_with(SiteConfig::default())), get("/posts/edit/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("No post with id"));
    assert!(html.contains("value=\"\""));
    assert!(!html.contains("value=\"Alice\""));
}

#[tokio::test]
async fn test_submit_invalid_shows_errors() {
    let state = state_with(SiteConfig::default());
    let (status, html) = send(
        router(state.clone()),
        post_form("/posts/edit/1", "title=&body=World&author=Alice&date=2024-01-01"),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("Title is required"));
    assert!(!html.contains("Author is required"));
    assert!(html.contains("value=\"Alice\""));
    assert!(state.toasts().is_empty());
}

#[tokio::test]
async fn test_submit_valid_redirects_with_toast() {
    let state = state_with(SiteConfig::default());
    let response = router(state.clone())
        .oneshot(post_form(
            "/posts/edit/1",
            "title=Hello&body=World&author=Dave&date=2024-03-03",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/posts/edit/1");
    assert_eq!(state.toasts().len(), 1);

    // The toast shows once on the next page, then is gone
    let (_, html) = send(router(state.clone()), get("/posts/edit/1")).await;
    assert!(html.contains("Post Has Been Updated Successfully"));
    assert!(html.contains("Updated by Dave on 2024-03-03"));
    assert!(state.toasts().is_empty());

    // Nothing is written back by default
    assert_eq!(state.store().get("1").unwrap().author, "Alice");
}

#[tokio::test]
async fn test_submit_accepts_capitalized_fields() {
    let state = state_with(SiteConfig::default());
    let response = router(state.clone())
        .oneshot(post_form(
            "/posts/edit/2",
            "title=T&body=B&Author=Erin&Date=2024-04-04",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        state.toasts().drain()[0].notification.description,
        "Updated by Erin on 2024-04-04"
    );
}

#[tokio::test]
async fn test_submit_with_write_back() {
    let config = SiteConfig {
        write_back: true,
        ..SiteConfig::default()
    };
    let state = state_with(config);

    let response = router(state.clone())
        .oneshot(post_form(
            "/posts/edit/2",
            "title=Renamed&body=B&author=Frank&date=2024-05-05",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let post = state.store().get("2").unwrap();
    assert_eq!(post.title, "Renamed");
    assert_eq!(post.author, "Frank");

    let (status, _) = send(
        router(state.clone()),
        post_form("/posts/edit/99", "title=a&body=b&author=c&date=d"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_posts() {
    let state = state_with(SiteConfig::default());

    let (status, body) = send(router(state.clone()), get("/api/posts")).await;
    assert_eq!(status, StatusCode::OK);
    let posts: Vec<Post> = serde_json::from_str(&body).unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "1");

    let (status, body) = send(router(state.clone()), get("/api/posts/1")).await;
    assert_eq!(status, StatusCode::OK);
    let post: Post = serde_json::from_str(&body).unwrap();
    assert_eq!(post.comments.len(), 1);

    let (status, body) = send(router(state), get("/api/posts/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Post not found: 99"));
}

#[tokio::test]
async fn test_stylesheet() {
    let response = router(state_with(SiteConfig::default()))
        .oneshot(get("/static/admin.css"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/css"));
}

#[tokio::test]
async fn test_links_for_id_with_slash() {
    let store = InMemoryStore::from_posts(vec![Post::new(
        "drafts/intro",
        "Intro",
        "Body",
        "Gina",
        "2024-06-06",
    )])
    .unwrap();
    let state = Arc::new(AppState::new(SiteConfig::default(), Arc::new(store)).unwrap());

    let (_, html) = send(router(state.clone()), get("/posts")).await;
    assert!(html.contains("href=\"/posts/drafts%2Fintro\""));
    assert!(html.contains("href=\"/posts/edit/drafts%2Fintro\""));

    let (status, html) = send(router(state.clone()), get("/posts/drafts%2Fintro")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("href=\"/posts/edit/drafts%2Fintro\""));

    let (status, html) = send(router(state.clone()), get("/posts/edit/drafts%2Fintro")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("value=\"Gina\""));
    assert!(html.contains("action=\"/posts/edit/drafts%2Fintro\""));

    let response = router(state.clone())
        .oneshot(post_form(
            "/posts/edit/drafts%2Fintro",
            "title=Intro&body=Body&author=Hal&date=2024-07-07",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/posts/edit/drafts%2Fintro"
    );
}

#[tokio::test]
async fn test_submit_with_both_field_spellings_is_rejected() {
    let state = state_with(SiteConfig::default());
    let (status, body) = send(
        router(state.clone()),
        post_form(
            "/posts/edit/1",
            "title=T&body=B&author=Ann&Author=Bea&date=2024-01-01",
        ),
    )
    .await;

    // Rejected while decoding the form, before validation runs
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("duplicate field `author`"));
    assert!(!body.contains("edit-form"));
    assert!(state.toasts().is_empty());
}
