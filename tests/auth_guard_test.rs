mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use quizsmith::{AppState, provider::QuestionProvider, router};
use tower::ServiceExt;

// The guard runs before any provider call, so an unreachable base URL is
// enough for these tests.
fn unused_provider() -> QuestionProvider {
    QuestionProvider::new("http://127.0.0.1:9".to_string())
}

#[tokio::test]
async fn api_routes_reject_requests_without_a_session() {
    let db = common::create_test_db().await;
    let app = router(AppState {
        db: db.clone(),
        provider: unused_provider(),
    });

    let cases = [
        (
            Method::POST,
            "/api/game",
            Body::from(r#"{"topic":"Ancient Rome","type":"mcq","amount":3}"#),
        ),
        (Method::GET, "/api/game/some-id", Body::empty()),
        (Method::GET, "/api/history", Body::empty()),
        (
            Method::POST,
            "/api/checkAnswer",
            Body::from(r#"{"questionId":"q","userInput":"Rome"}"#),
        ),
    ];

    for (method, uri, body) in cases {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .expect("request build should succeed");
        let resp = app
            .clone()
            .oneshot(req)
            .await
            .expect("router should respond");

        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "expected UNAUTHORIZED for {uri}",
        );
    }

    // Rejected before any store mutation.
    assert_eq!(db.games_count().await.unwrap(), 0);
}

#[tokio::test]
async fn a_stale_session_cookie_is_rejected() {
    let db = common::create_test_db().await;
    let app = router(AppState {
        db,
        provider: unused_provider(),
    });

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/history")
        .header(header::COOKIE, common::session_cookie("not-a-session"))
        .body(Body::empty())
        .expect("request build should succeed");
    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn a_valid_session_passes_the_guard() {
    let db = common::create_test_db().await;
    let (_user_id, session) = common::create_test_user(&db).await;
    let app = router(AppState {
        db,
        provider: unused_provider(),
    });

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/history")
        .header(header::COOKIE, common::session_cookie(&session))
        .body(Body::empty())
        .expect("request build should succeed");
    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
}
