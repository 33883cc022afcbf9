use crate::domain::errors::DomainResult;
use crate::domain::user::value_objects::UserId;
use async_trait::async_trait;

/// Displayable view of a user owned by the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
}

/// Read-only lookup into the host's user table.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<UserSummary>>;

    /// Users that no longer exist are simply absent from the result.
    async fn find_many(&self, ids: &[UserId]) -> DomainResult<Vec<UserSummary>>;
}
