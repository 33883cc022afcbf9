// src/application/commands/activity/record.rs
use super::ActivityCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        activity::{ActivityRecord, Description, NewActivity},
        user::UserId,
    },
};
use std::net::IpAddr;

pub struct RecordActivityCommand {
    pub description: String,
    pub user_id: UserId,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl RecordActivityCommand {
    pub fn new(description: impl Into<String>, user_id: UserId) -> Self {
        Self {
            description: description.into(),
            user_id,
            ip_address: None,
            user_agent: None,
        }
    }

    pub fn ip_address(mut self, ip_address: Option<String>) -> Self {
        self.ip_address = ip_address;
        self
    }

    pub fn user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }
}

impl ActivityCommandService {
    /// Append one record. `created_at` comes from the service clock.
    pub async fn record(&self, command: RecordActivityCommand) -> ApplicationResult<ActivityRecord> {
        let description = Description::new(command.description)?;
        let ip_address = normalize_ip(command.ip_address);
        let user_agent = normalize_text(command.user_agent);

        let activity = NewActivity::new(description, command.user_id, self.clock.now())
            .with_ip_address(ip_address)
            .with_user_agent(user_agent);

        let record = self
            .store
            .record(activity)
            .await
            .map_err(ApplicationError::from)?;

        tracing::debug!(
            activity_id = i64::from(record.id()),
            user_id = i64::from(record.user_id()),
            "activity recorded"
        );
        Ok(record)
    }
}

fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// Unparseable addresses are dropped rather than failing the write.
fn normalize_ip(value: Option<String>) -> Option<String> {
    let raw = normalize_text(value)?;
    match raw.parse::<IpAddr>() {
        Ok(addr) => Some(addr.to_string()),
        Err(_) => {
            tracing::debug!(ip_address = %raw, "discarding unparseable ip address");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ip_keeps_valid_v4_and_v6() {
        assert_eq!(normalize_ip(Some(" 10.1.2.3 ".into())).as_deref(), Some("10.1.2.3"));
        assert_eq!(normalize_ip(Some("::1".into())).as_deref(), Some("::1"));
    }

    #[test]
    fn normalize_ip_drops_garbage() {
        assert_eq!(normalize_ip(Some("not-an-ip".into())), None);
        assert_eq!(normalize_ip(Some("   ".into())), None);
        assert_eq!(normalize_ip(None), None);
    }
}
