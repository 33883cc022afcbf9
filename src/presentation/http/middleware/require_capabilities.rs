// src/presentation/http/middleware/require_capabilities.rs
use crate::application::{capabilities, error::ApplicationError};
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Enforce a single capability `(resource, action)`. On success the verified
/// caller is stored in the request extensions for the handler.
pub async fn require_capability(
    mut req: Request<Body>,
    next: Next,
    resource: &'static str,
    action: &'static str,
) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let Some(header) = req.headers().typed_get::<Authorization<Bearer>>() else {
        return HttpError::from_error(ApplicationError::unauthorized(
            "missing Authorization header",
        ))
        .into_response();
    };

    match state
        .services
        .authenticate_and_authorize(header.token(), resource, action)
        .await
    {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!(resource, action, error = %err, "capability check failed");
            HttpError::from_error(err).into_response()
        }
    }
}

pub async fn require_activity_access(req: Request<Body>, next: Next) -> Response {
    let (resource, action) = capabilities::USERS_ACTIVITY;
    require_capability(req, next, resource, action).await
}

pub async fn require_event_publisher(req: Request<Body>, next: Next) -> Response {
    let (resource, action) = capabilities::ACTIVITY_PUBLISH;
    require_capability(req, next, resource, action).await
}
