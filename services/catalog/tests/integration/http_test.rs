use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_test::{TestRequest, TestServer};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use kino_catalog::router::build_router;
use kino_catalog::state::AppState;
use kino_testing::auth::MockAuth;

/// Routes exercised here fail before reaching storage, so no database is needed.
fn test_server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::Disconnected,
    };
    TestServer::new(build_router(state)).unwrap()
}

fn with_identity(mut request: TestRequest, auth: &MockAuth) -> TestRequest {
    for (name, value) in auth.headers().iter() {
        request = request.add_header(name.clone(), value.clone());
    }
    request
}

#[tokio::test]
async fn should_answer_liveness_check() {
    let server = test_server();

    server.get("/healthz").await.assert_status_ok();
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let server = test_server();

    server
        .get("/readyz")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_reject_resolution_without_identity() {
    let server = test_server();
    let path = format!("/profiles/{}/contents/{}", Uuid::new_v4(), Uuid::new_v4());

    server
        .get(&path)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_reference_list_without_identity() {
    let response = build_router(AppState {
        db: DatabaseConnection::Disconnected,
    })
    .oneshot(Request::get("/genres").body(Body::empty()).unwrap())
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_forbid_reference_writes_for_non_admin() {
    let server = test_server();
    let auth = MockAuth::user();
    let id = Uuid::new_v4();

    for path in ["/genres", "/actors", "/creators"] {
        let response = with_identity(server.post(path), &auth)
            .json(&json!({ "name": "Noir" }))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);
        let body: Value = response.json();
        assert_eq!(body["kind"], "FORBIDDEN");

        with_identity(server.patch(&format!("{path}/{id}")), &auth)
            .json(&json!({ "name": "Noir" }))
            .await
            .assert_status(StatusCode::FORBIDDEN);

        with_identity(server.delete(&format!("{path}/{id}")), &auth)
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }
}

#[tokio::test]
async fn should_surface_storage_failure_as_internal_error() {
    let server = test_server();
    let auth = MockAuth::admin();

    let response = with_identity(server.post("/genres"), &auth)
        .json(&json!({ "name": "Noir" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INTERNAL");
}

#[tokio::test]
async fn should_forbid_media_update_for_non_admin() {
    let server = test_server();
    let auth = MockAuth::user();

    let response = with_identity(server.patch(&format!("/media/{}", Uuid::new_v4())), &auth)
        .json(&json!({
            "title": "Pilot",
            "synopsis": "",
            "order_index": 1,
            "url": "https://cdn.example.com/1.m3u8",
            "thumbnail": "",
            "running_time": 2700
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["kind"], "FORBIDDEN");
    assert_eq!(body["code"], 40300);
}
