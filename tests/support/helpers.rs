// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION};
use serde_json::Value;
use std::sync::Arc;
use user_activity::application::{
    ports::security::TokenManager, ports::time::Clock, services::ApplicationServices,
};
use user_activity::domain::{activity::ActivityStore, user::UserDirectory};
use user_activity::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};

/// Users known to the default in-memory directory.
pub const KNOWN_USERS: &[(i64, &str)] = &[(1, "admin"), (2, "plain"), (3, "publisher"), (7, "jdoe")];

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn build_services(
    store: Arc<dyn ActivityStore>,
    users: Arc<dyn UserDirectory>,
    clock: Arc<dyn Clock>,
) -> Arc<ApplicationServices> {
    let token_manager: Arc<dyn TokenManager> = Arc::new(mocks::DummyTokenManager);
    Arc::new(ApplicationServices::new(store, users, token_manager, clock, 10))
}

pub fn build_test_state(store: Arc<dyn ActivityStore>) -> HttpState {
    let users: Arc<dyn UserDirectory> = Arc::new(mocks::InMemoryUserDirectory::with_users(KNOWN_USERS));
    let services = build_services(store, users, Arc::new(mocks::SteppingClock::default()));

    let events = Arc::new(services.event_dispatcher());
    HttpState { services, events }
}

pub fn make_test_router_with_store(store: Arc<dyn ActivityStore>, expose_api: bool) -> axum::Router {
    build_router(
        build_test_state(store),
        RouterOptions {
            expose_api,
            allowed_origins: Vec::new(),
        },
    )
}

pub fn make_test_router(expose_api: bool) -> (axum::Router, Arc<mocks::InMemoryActivityStore>) {
    let store = Arc::new(mocks::InMemoryActivityStore::new());
    let router = make_test_router_with_store(store.clone(), expose_api);
    (router, store)
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, bearer(token));
    }
    builder.body(Body::empty()).expect("request")
}

pub fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, bearer(token));
    }
    builder
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .expect("request")
}

pub async fn to_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = to_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
