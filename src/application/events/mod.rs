//! Translation of host domain events into activity records.
mod dispatcher;
mod permissions;
mod roles;
mod users;

pub use dispatcher::{DispatchReport, DomainEventSink, EventDispatcher};
pub use permissions::PermissionEventsSubscriber;
pub use roles::RoleEventsSubscriber;
pub use users::UserEventsSubscriber;

use crate::application::{
    commands::activity::{ActivityCommandService, RecordActivityCommand},
    error::ApplicationResult,
};
use crate::domain::events::EventEnvelope;

/// Write one record for `envelope`, attributed to its actor.
async fn record_for(
    commands: &ActivityCommandService,
    envelope: &EventEnvelope,
    description: String,
) -> ApplicationResult<()> {
    let command = RecordActivityCommand::new(description, envelope.actor)
        .ip_address(envelope.ip_address.clone())
        .user_agent(envelope.user_agent.clone());
    commands.record(command).await.map(|_| ())
}
