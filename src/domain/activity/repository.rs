use crate::domain::activity::{
    entity::{ActivityRecord, NewActivity},
    pagination::{ActivityPage, PageRequest},
};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Append-only persistence for activity records.
///
/// Both listing operations return records newest first (`created_at`
/// descending, ties broken by id descending).
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn record(&self, activity: NewActivity) -> DomainResult<ActivityRecord>;

    async fn list_for_user(&self, user_id: UserId, page: PageRequest)
    -> DomainResult<ActivityPage>;

    async fn list_all(&self, page: PageRequest) -> DomainResult<ActivityPage>;
}
