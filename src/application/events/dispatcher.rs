use crate::application::error::ApplicationResult;
use crate::domain::events::{EventEnvelope, RawEvent, UnrecognizedEventPayload};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Observer of domain events.
#[async_trait]
pub trait DomainEventSink: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns `Ok(true)` when the event was recorded, `Ok(false)` when this
    /// sink does not handle the event kind.
    async fn handle(&self, envelope: &EventEnvelope) -> ApplicationResult<bool>;
}

/// Outcome of delivering one event to every registered sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DispatchReport {
    pub kind: String,
    pub recorded: usize,
    pub failed: usize,
    /// The payload could not be decoded and was dropped.
    pub skipped: bool,
}

/// Delivers events synchronously to the sinks registered on this instance.
///
/// Sink failures never reach the caller: the action that emitted the event has
/// already happened and must not be undone by a logging problem.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    sinks: Vec<Arc<dyn DomainEventSink>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, sink: Arc<dyn DomainEventSink>) -> &mut Self {
        tracing::debug!(sink = sink.name(), "registered event sink");
        self.sinks.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub async fn dispatch(&self, envelope: &EventEnvelope) -> DispatchReport {
        let kind = envelope.event.kind();
        let mut report = DispatchReport {
            kind: kind.to_string(),
            ..DispatchReport::default()
        };

        for sink in &self.sinks {
            match sink.handle(envelope).await {
                Ok(true) => report.recorded += 1,
                Ok(false) => {}
                Err(err) => {
                    report.failed += 1;
                    tracing::error!(
                        sink = sink.name(),
                        kind,
                        actor = i64::from(envelope.actor),
                        error = %err,
                        "failed to record activity"
                    );
                }
            }
        }

        if report.recorded == 0 && report.failed == 0 {
            tracing::debug!(kind, "no sink handled event");
        }
        report
    }

    /// Decode and dispatch an event received over the wire. Payloads that do
    /// not decode are logged and skipped.
    pub async fn dispatch_raw(&self, raw: RawEvent) -> DispatchReport {
        match EventEnvelope::try_from(raw) {
            Ok(envelope) => self.dispatch(&envelope).await,
            Err(err) => Self::skip(&err),
        }
    }

    /// Report an event that never reached the sinks.
    pub fn skip(err: &UnrecognizedEventPayload) -> DispatchReport {
        tracing::warn!(kind = %err.kind, reason = %err.reason, "skipping unrecognized event");
        DispatchReport {
            kind: err.kind.clone(),
            skipped: true,
            ..DispatchReport::default()
        }
    }
}
