use super::{DomainEventSink, record_for};
use crate::application::{commands::activity::ActivityCommandService, error::ApplicationResult};
use crate::domain::events::{DomainEvent, EventEnvelope};
use async_trait::async_trait;
use std::sync::Arc;

/// Records account and profile lifecycle events.
pub struct UserEventsSubscriber {
    commands: Arc<ActivityCommandService>,
}

impl UserEventsSubscriber {
    pub fn new(commands: Arc<ActivityCommandService>) -> Self {
        Self { commands }
    }

    pub fn describe(event: &DomainEvent) -> Option<String> {
        let description = match event {
            DomainEvent::UserLoggedIn => "Logged in.".to_string(),
            DomainEvent::UserLoggedOut => "Logged out.".to_string(),
            DomainEvent::UserRegistered => "Created an account.".to_string(),
            DomainEvent::UserCreated { user } => format!("Created new user {user}."),
            DomainEvent::UserUpdated { user } => format!("Updated profile details for {user}."),
            DomainEvent::UserDeleted { user } => format!("Deleted user {user}."),
            DomainEvent::UserBanned { user } => format!("Banned user {user}."),
            DomainEvent::ProfileUpdated => "Updated profile details.".to_string(),
            DomainEvent::AvatarChanged => "Updated profile avatar.".to_string(),
            DomainEvent::SettingsUpdated => "Updated website settings.".to_string(),
            DomainEvent::TwoFactorEnabled { user } => {
                format!("Enabled Two-Factor Authentication for {user}.")
            }
            DomainEvent::TwoFactorDisabled { user } => {
                format!("Disabled Two-Factor Authentication for {user}.")
            }
            DomainEvent::PasswordResetRequested => "Requested password reset email.".to_string(),
            DomainEvent::PasswordReset => {
                "Reset password using \"Forgot Password\" option.".to_string()
            }
            _ => return None,
        };
        Some(description)
    }
}

#[async_trait]
impl DomainEventSink for UserEventsSubscriber {
    fn name(&self) -> &'static str {
        "users"
    }

    async fn handle(&self, envelope: &EventEnvelope) -> ApplicationResult<bool> {
        match Self::describe(&envelope.event) {
            Some(description) => {
                record_for(&self.commands, envelope, description).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
