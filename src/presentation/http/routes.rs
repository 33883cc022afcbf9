// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{activity, events, navigation},
    middleware::require_capabilities::{require_activity_access, require_event_publisher},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Mount the `/api` copies of the read endpoints.
    pub expose_api: bool,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let mut api = event_routes();
    if options.expose_api {
        api = api.merge(activity_routes());
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/navigation", get(navigation::sidebar))
        .merge(activity_routes())
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn activity_routes() -> Router {
    Router::new()
        .route("/activity", get(activity::list_activity))
        .route("/activity/users/{id}", get(activity::list_user_activity))
        .route(
            "/users/{id}/activity-panel",
            get(activity::user_activity_panel),
        )
        .route_layer(middleware::from_fn(require_activity_access))
}

fn event_routes() -> Router {
    Router::new()
        .route("/events", post(events::publish_event))
        .route_layer(middleware::from_fn(require_event_publisher))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
