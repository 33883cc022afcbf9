// tests/support/mocks/users.rs
use async_trait::async_trait;
use std::collections::HashMap;
use user_activity::domain::{
    errors::DomainResult,
    user::{UserDirectory, UserId, UserSummary},
};

#[derive(Clone, Default)]
pub struct InMemoryUserDirectory {
    users: HashMap<UserId, String>,
}

impl InMemoryUserDirectory {
    pub fn with_users(users: &[(i64, &str)]) -> Self {
        let users = users
            .iter()
            .map(|(id, name)| (UserId::new(*id).expect("invalid user id"), name.to_string()))
            .collect();
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<UserSummary>> {
        Ok(self.users.get(&id).map(|username| UserSummary {
            id,
            username: username.clone(),
        }))
    }

    async fn find_many(&self, ids: &[UserId]) -> DomainResult<Vec<UserSummary>> {
        Ok(ids
            .iter()
            .filter_map(|id| {
                self.users.get(id).map(|username| UserSummary {
                    id: *id,
                    username: username.clone(),
                })
            })
            .collect())
    }
}
