use crate::application::events::{DispatchReport, EventDispatcher};
use crate::domain::events::{RawEvent, UnrecognizedEventPayload};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::rejection::JsonRejection, http::StatusCode};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// A domain event delivered by the host application.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishEventRequest {
    /// snake_case event kind, e.g. `user_created`.
    pub kind: String,
    pub actor_id: i64,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
}

impl From<PublishEventRequest> for RawEvent {
    fn from(req: PublishEventRequest) -> Self {
        RawEvent {
            kind: req.kind,
            actor_id: req.actor_id,
            ip_address: req.ip_address,
            user_agent: req.user_agent,
            payload: req.payload,
        }
    }
}

/// Always accepted once authenticated: malformed bodies, unrecognised payloads
/// and failed writes are reported in the body, never as an error status.
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = PublishEventRequest,
    responses(
        (status = 202, description = "Event dispatched to the activity subscribers.", body = DispatchReport),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing activity.publish capability.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Events"
)]
pub async fn publish_event(
    Extension(state): Extension<HttpState>,
    body: Result<Json<Value>, JsonRejection>,
) -> (StatusCode, Json<DispatchReport>) {
    let report = match body {
        Ok(Json(value)) => match decode_request(value) {
            Ok(raw) => state.events.dispatch_raw(raw).await,
            Err(err) => EventDispatcher::skip(&err),
        },
        Err(rejection) => EventDispatcher::skip(&UnrecognizedEventPayload::new(
            "unknown",
            rejection.body_text(),
        )),
    };
    (StatusCode::ACCEPTED, Json(report))
}

fn decode_request(value: Value) -> Result<RawEvent, UnrecognizedEventPayload> {
    let kind = value
        .get("kind")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();
    serde_json::from_value::<PublishEventRequest>(value)
        .map(RawEvent::from)
        .map_err(|err| UnrecognizedEventPayload::new(&kind, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_request_keeps_kind_of_malformed_body() {
        let err = decode_request(json!({ "kind": "user_logged_in" })).unwrap_err();
        assert_eq!(err.kind, "user_logged_in");
        assert!(err.reason.contains("actor_id"));
    }

    #[test]
    fn decode_request_reads_full_event() {
        let raw = decode_request(json!({
            "kind": "user_logged_out",
            "actor_id": 4,
            "user_agent": "curl/8.0"
        }))
        .unwrap();
        assert_eq!(raw.actor_id, 4);
        assert_eq!(raw.user_agent.as_deref(), Some("curl/8.0"));
        assert_eq!(raw.payload, Value::Null);
    }
}
