use super::{DomainEventSink, record_for};
use crate::application::{commands::activity::ActivityCommandService, error::ApplicationResult};
use crate::domain::events::{DomainEvent, EventEnvelope};
use async_trait::async_trait;
use std::sync::Arc;

/// Records role lifecycle and role assignment events.
pub struct RoleEventsSubscriber {
    commands: Arc<ActivityCommandService>,
}

impl RoleEventsSubscriber {
    pub fn new(commands: Arc<ActivityCommandService>) -> Self {
        Self { commands }
    }

    pub fn describe(event: &DomainEvent) -> Option<String> {
        match event {
            DomainEvent::RoleCreated { role } => Some(format!("Created new role {role}.")),
            DomainEvent::RoleUpdated { role } => Some(format!("Updated role {role}.")),
            DomainEvent::RoleDeleted { role } => Some(format!("Deleted role {role}.")),
            DomainEvent::RolePermissionsUpdated { role } => {
                Some(format!("Updated role permissions for {role}."))
            }
            DomainEvent::RoleAssigned { user, role } => {
                Some(format!("Assigned role {role} to user {user}."))
            }
            DomainEvent::RoleRevoked { user, role } => {
                Some(format!("Revoked role {role} from user {user}."))
            }
            _ => None,
        }
    }
}

#[async_trait]
impl DomainEventSink for RoleEventsSubscriber {
    fn name(&self) -> &'static str {
        "roles"
    }

    async fn handle(&self, envelope: &EventEnvelope) -> ApplicationResult<bool> {
        let Some(description) = Self::describe(&envelope.event) else {
            return Ok(false);
        };
        record_for(&self.commands, envelope, description).await?;
        Ok(true)
    }
}
