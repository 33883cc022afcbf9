use crate::domain::activity::ActivityRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{serde_time, users::UserSummaryDto};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActivityDto {
    pub id: i64,
    pub description: String,
    pub user_id: i64,
    /// `None` when the acting user no longer exists.
    pub user_name: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl ActivityDto {
    pub fn from_record(record: ActivityRecord, user_name: Option<String>) -> Self {
        Self {
            id: record.id().into(),
            description: record.description().to_string(),
            user_id: record.user_id().into(),
            user_name,
            ip_address: record.ip_address().map(str::to_string),
            user_agent: record.user_agent().map(str::to_string),
            created_at: record.created_at(),
        }
    }
}

/// Data shown in the activity panel of a user's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserActivityPanelDto {
    pub user: UserSummaryDto,
    pub activities: Vec<ActivityDto>,
}
