use super::{DomainEventSink, record_for};
use crate::application::{commands::activity::ActivityCommandService, error::ApplicationResult};
use crate::domain::events::{DomainEvent, EventEnvelope};
use async_trait::async_trait;
use std::sync::Arc;

pub struct PermissionEventsSubscriber {
    commands: Arc<ActivityCommandService>,
}

impl PermissionEventsSubscriber {
    pub fn new(commands: Arc<ActivityCommandService>) -> Self {
        Self { commands }
    }

    pub fn describe(event: &DomainEvent) -> Option<String> {
        match event {
            DomainEvent::PermissionCreated { permission } => {
                Some(format!("Created new permission called {permission}."))
            }
            DomainEvent::PermissionUpdated { permission } => {
                Some(format!("Updated the permission named {permission}."))
            }
            DomainEvent::PermissionDeleted { permission } => {
                Some(format!("Deleted permission named {permission}."))
            }
            DomainEvent::PermissionGranted { permission, role } => {
                Some(format!("Granted permission {permission} to role {role}."))
            }
            DomainEvent::PermissionRevoked { permission, role } => {
                Some(format!("Revoked permission {permission} from role {role}."))
            }
            _ => None,
        }
    }
}

#[async_trait]
impl DomainEventSink for PermissionEventsSubscriber {
    fn name(&self) -> &'static str {
        "permissions"
    }

    async fn handle(&self, envelope: &EventEnvelope) -> ApplicationResult<bool> {
        let Some(description) = Self::describe(&envelope.event) else {
            return Ok(false);
        };
        record_for(&self.commands, envelope, description).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::events::{RoleEventsSubscriber, UserEventsSubscriber};
    use crate::domain::events::EntityRef;

    fn all_kinds() -> Vec<DomainEvent> {
        let user = EntityRef::named(2, "jdoe");
        let role = EntityRef::named(3, "Admin");
        let permission = EntityRef::named(4, "users.manage");
        vec![
            DomainEvent::UserLoggedIn,
            DomainEvent::UserLoggedOut,
            DomainEvent::UserRegistered,
            DomainEvent::UserCreated { user: user.clone() },
            DomainEvent::UserUpdated { user: user.clone() },
            DomainEvent::UserDeleted { user: user.clone() },
            DomainEvent::UserBanned { user: user.clone() },
            DomainEvent::ProfileUpdated,
            DomainEvent::AvatarChanged,
            DomainEvent::SettingsUpdated,
            DomainEvent::TwoFactorEnabled { user: user.clone() },
            DomainEvent::TwoFactorDisabled { user: user.clone() },
            DomainEvent::PasswordResetRequested,
            DomainEvent::PasswordReset,
            DomainEvent::RoleCreated { role: role.clone() },
            DomainEvent::RoleUpdated { role: role.clone() },
            DomainEvent::RoleDeleted { role: role.clone() },
            DomainEvent::RolePermissionsUpdated { role: role.clone() },
            DomainEvent::RoleAssigned {
                user: user.clone(),
                role: role.clone(),
            },
            DomainEvent::RoleRevoked {
                user: user.clone(),
                role: role.clone(),
            },
            DomainEvent::PermissionCreated {
                permission: permission.clone(),
            },
            DomainEvent::PermissionUpdated {
                permission: permission.clone(),
            },
            DomainEvent::PermissionDeleted {
                permission: permission.clone(),
            },
            DomainEvent::PermissionGranted {
                permission: permission.clone(),
                role: role.clone(),
            },
            DomainEvent::PermissionRevoked { permission, role },
        ]
    }

    #[test]
    fn every_kind_has_exactly_one_template() {
        for event in all_kinds() {
            let matches = [
                UserEventsSubscriber::describe(&event),
                RoleEventsSubscriber::describe(&event),
                PermissionEventsSubscriber::describe(&event),
            ]
            .into_iter()
            .flatten()
            .count();
            assert_eq!(matches, 1, "{} should map to one template", event.kind());
        }
    }

    #[test]
    fn templates_interpolate_entity_names() {
        let event = DomainEvent::PermissionGranted {
            permission: EntityRef::named(4, "users.manage"),
            role: EntityRef::new(9),
        };
        assert_eq!(
            PermissionEventsSubscriber::describe(&event).as_deref(),
            Some("Granted permission users.manage to role #9.")
        );
    }
}
