#![allow(dead_code)]

use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use quizsmith::db::Db;
use quizsmith::names;

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("quizsmith_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite:{}", path.display());
    Db::new(&url).await.expect("failed to create test database")
}

pub async fn create_test_user(db: &Db) -> (i64, String) {
    let user_id = db
        .create_user("player@example.com", "Player")
        .await
        .expect("failed to create user");
    let session = db
        .create_user_session(user_id)
        .await
        .expect("failed to create session");
    (user_id, session)
}

pub fn session_cookie(session: &str) -> String {
    format!("{}={}", names::USER_SESSION_COOKIE_NAME, session)
}

/// Serve a stand-in question provider on an ephemeral port, answering every
/// request with the given status and body. Returns its base URL.
pub async fn spawn_mock_provider(status: StatusCode, body: serde_json::Value) -> String {
    let app = Router::new().route(
        names::PROVIDER_QUESTIONS_PATH,
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock provider");
    let addr = listener.local_addr().expect("mock provider has no address");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("mock provider stopped");
    });

    format!("http://{addr}")
}
