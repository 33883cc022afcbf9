// src/domain/activity/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

pub const MAX_DESCRIPTION_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityId(i64);

impl ActivityId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("activity id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ActivityId> for i64 {
    fn from(value: ActivityId) -> Self {
        value.0
    }
}

/// Human readable summary of an action, e.g. "Updated role Admin.".
///
/// Blank descriptions are rejected; anything longer than the column width is
/// cut on a char boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "activity description cannot be empty".into(),
            ));
        }

        let truncated = match trimmed.char_indices().nth(MAX_DESCRIPTION_LEN) {
            Some((idx, _)) => &trimmed[..idx],
            None => trimmed,
        };
        Ok(Self(truncated.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted activity entry. Records are never modified once written, so
/// the fields are only readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    id: ActivityId,
    description: Description,
    user_id: UserId,
    ip_address: Option<String>,
    user_agent: Option<String>,
    created_at: DateTime<Utc>,
}

impl ActivityRecord {
    /// Rehydrate a record read back from storage.
    pub fn from_parts(id: ActivityId, activity: NewActivity) -> Self {
        let NewActivity {
            description,
            user_id,
            ip_address,
            user_agent,
            created_at,
        } = activity;

        Self {
            id,
            description,
            user_id,
            ip_address,
            user_agent,
            created_at,
        }
    }

    pub fn id(&self) -> ActivityId {
        self.id
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub description: Description,
    pub user_id: UserId,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewActivity {
    pub fn new(description: Description, user_id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            description,
            user_id,
            ip_address: None,
            user_agent: None,
            created_at,
        }
    }

    pub fn with_ip_address(mut self, ip_address: Option<String>) -> Self {
        self.ip_address = ip_address;
        self
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }
}
