// src/domain/events.rs
use crate::domain::user::UserId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Descriptor of the entity an event is about (a user, role or permission).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EntityRef {
    pub fn new(id: i64) -> Self {
        Self { id, name: None }
    }

    pub fn named(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => f.write_str(name),
            _ => write!(f, "#{}", self.id),
        }
    }
}

/// Lifecycle notifications emitted by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum DomainEvent {
    UserLoggedIn,
    UserLoggedOut,
    UserRegistered,
    UserCreated { user: EntityRef },
    UserUpdated { user: EntityRef },
    UserDeleted { user: EntityRef },
    UserBanned { user: EntityRef },
    ProfileUpdated,
    AvatarChanged,
    SettingsUpdated,
    TwoFactorEnabled { user: EntityRef },
    TwoFactorDisabled { user: EntityRef },
    PasswordResetRequested,
    PasswordReset,
    RoleCreated { role: EntityRef },
    RoleUpdated { role: EntityRef },
    RoleDeleted { role: EntityRef },
    RolePermissionsUpdated { role: EntityRef },
    RoleAssigned { user: EntityRef, role: EntityRef },
    RoleRevoked { user: EntityRef, role: EntityRef },
    PermissionCreated { permission: EntityRef },
    PermissionUpdated { permission: EntityRef },
    PermissionDeleted { permission: EntityRef },
    PermissionGranted { permission: EntityRef, role: EntityRef },
    PermissionRevoked { permission: EntityRef, role: EntityRef },
}

impl DomainEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            DomainEvent::UserLoggedIn => "user_logged_in",
            DomainEvent::UserLoggedOut => "user_logged_out",
            DomainEvent::UserRegistered => "user_registered",
            DomainEvent::UserCreated { .. } => "user_created",
            DomainEvent::UserUpdated { .. } => "user_updated",
            DomainEvent::UserDeleted { .. } => "user_deleted",
            DomainEvent::UserBanned { .. } => "user_banned",
            DomainEvent::ProfileUpdated => "profile_updated",
            DomainEvent::AvatarChanged => "avatar_changed",
            DomainEvent::SettingsUpdated => "settings_updated",
            DomainEvent::TwoFactorEnabled { .. } => "two_factor_enabled",
            DomainEvent::TwoFactorDisabled { .. } => "two_factor_disabled",
            DomainEvent::PasswordResetRequested => "password_reset_requested",
            DomainEvent::PasswordReset => "password_reset",
            DomainEvent::RoleCreated { .. } => "role_created",
            DomainEvent::RoleUpdated { .. } => "role_updated",
            DomainEvent::RoleDeleted { .. } => "role_deleted",
            DomainEvent::RolePermissionsUpdated { .. } => "role_permissions_updated",
            DomainEvent::RoleAssigned { .. } => "role_assigned",
            DomainEvent::RoleRevoked { .. } => "role_revoked",
            DomainEvent::PermissionCreated { .. } => "permission_created",
            DomainEvent::PermissionUpdated { .. } => "permission_updated",
            DomainEvent::PermissionDeleted { .. } => "permission_deleted",
            DomainEvent::PermissionGranted { .. } => "permission_granted",
            DomainEvent::PermissionRevoked { .. } => "permission_revoked",
        }
    }

    /// Decode a host payload. Unit kinds ignore whatever context the payload
    /// carries; struct kinds ignore unknown fields.
    pub fn decode(kind: &str, payload: Value) -> Result<Self, UnrecognizedEventPayload> {
        let mut envelope = Map::new();
        envelope.insert("kind".into(), Value::String(kind.to_string()));

        if let Ok(event) = serde_json::from_value::<Self>(Value::Object(envelope.clone())) {
            return Ok(event);
        }

        envelope.insert("payload".into(), payload);
        serde_json::from_value(Value::Object(envelope))
            .map_err(|err| UnrecognizedEventPayload::new(kind, err.to_string()))
    }
}

/// Who triggered an event, and from where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEnvelope {
    pub actor: UserId,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub event: DomainEvent,
}

impl EventEnvelope {
    pub fn new(actor: UserId, event: DomainEvent) -> Self {
        Self {
            actor,
            ip_address: None,
            user_agent: None,
            event,
        }
    }

    pub fn with_client(mut self, ip_address: Option<String>, user_agent: Option<String>) -> Self {
        self.ip_address = ip_address;
        self.user_agent = user_agent;
        self
    }
}

/// An event as delivered over the wire, before it has been recognised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    pub kind: String,
    pub actor_id: i64,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub payload: Value,
}

impl TryFrom<RawEvent> for EventEnvelope {
    type Error = UnrecognizedEventPayload;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let actor = UserId::new(raw.actor_id)
            .map_err(|err| UnrecognizedEventPayload::new(&raw.kind, err.to_string()))?;
        let event = DomainEvent::decode(&raw.kind, raw.payload)?;
        Ok(EventEnvelope::new(actor, event).with_client(raw.ip_address, raw.user_agent))
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized event payload for kind '{kind}': {reason}")]
pub struct UnrecognizedEventPayload {
    pub kind: String,
    pub reason: String,
}

impl UnrecognizedEventPayload {
    pub fn new(kind: &str, reason: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            reason: reason.into(),
        }
    }
}
