//! Integration tests for the rendered about and profile pages.
//!
//! Tests verify:
//! - About page renders the hero and all carousel slides
//! - Profile page branches: signed out, signed in, provider failure
//! - Tokens never appear in full in the rendered profile

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use expert_gateway::error::AuthError;

use super::test_utils::{
    body_string, test_router, test_session, test_user, MockExpertStore, MockSessionProvider,
};

// =============================================================================
// About Page
// =============================================================================

#[tokio::test]
async fn test_about_page_renders() {
    let router = test_router(MockExpertStore::new(), MockSessionProvider::signed_out());

    let request = Request::builder()
        .uri("/about")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let html = body_string(response.into_body()).await;
    assert!(html.contains("About Us"));
    assert!(html.contains("banner-about.jpeg"));
    assert!(html.contains("slide-1"));
    assert!(html.contains("slide-2"));
    assert!(html.contains("slide-3"));
}

// =============================================================================
// Profile Page
// =============================================================================

#[tokio::test]
async fn test_profile_signed_out_shows_prompt() {
    let router = test_router(MockExpertStore::new(), MockSessionProvider::signed_out());

    let request = Request::builder()
        .uri("/profile")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response.into_body()).await;
    assert!(html.contains("Please sign in to view your profile."));
}

#[tokio::test]
async fn test_profile_signed_in_renders_user_and_session() {
    let sessions = MockSessionProvider::signed_out()
        .with_user(test_user())
        .with_session(test_session());
    let router = test_router(MockExpertStore::new(), sessions);

    let request = Request::builder()
        .uri("/profile")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response.into_body()).await;
    assert!(html.contains("ada@example.com"));
    assert!(html.contains("user-001"));
    assert!(html.contains("Active"));
    assert!(html.contains("bearer"));
    assert!(html.contains("1900000000"));
}

#[tokio::test]
async fn test_profile_never_leaks_full_tokens() {
    let session = test_session();
    let sessions = MockSessionProvider::signed_out()
        .with_user(test_user())
        .with_session(session.clone());
    let router = test_router(MockExpertStore::new(), sessions);

    let request = Request::builder()
        .uri("/profile")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let html = body_string(response.into_body()).await;

    assert!(!html.contains(&session.access_token));
    assert!(!html.contains(session.refresh_token.as_deref().unwrap()));
}

#[tokio::test]
async fn test_profile_user_without_session_shows_inactive() {
    let sessions = MockSessionProvider::signed_out().with_user(test_user());
    let router = test_router(MockExpertStore::new(), sessions);

    let request = Request::builder()
        .uri("/profile")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let html = body_string(response.into_body()).await;
    assert!(html.contains("No Active Session"));
}

#[tokio::test]
async fn test_profile_user_failure_renders_inline_error() {
    let sessions = MockSessionProvider::signed_out()
        .with_user_failure(AuthError::Connection("provider unreachable".to_string()));
    let router = test_router(MockExpertStore::new(), sessions);

    let request = Request::builder()
        .uri("/profile")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    // Degrades to inline error text, not an error status
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response.into_body()).await;
    assert!(html.contains("Error:"));
    assert!(html.contains("provider unreachable"));
}

#[tokio::test]
async fn test_profile_session_failure_renders_inline_error() {
    let sessions = MockSessionProvider::signed_out()
        .with_user(test_user())
        .with_session_failure(AuthError::InvalidSession("cookie is garbled".to_string()));
    let router = test_router(MockExpertStore::new(), sessions);

    let request = Request::builder()
        .uri("/profile")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response.into_body()).await;
    assert!(html.contains("Error:"));
    assert!(html.contains("cookie is garbled"));
}
