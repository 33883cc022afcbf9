// tests/support/mocks/security.rs
use async_trait::async_trait;
use std::collections::HashSet;
use user_activity::application::{
    ApplicationResult, dto::AuthenticatedUser, error::ApplicationError,
    ports::security::TokenManager,
};
use user_activity::domain::user::{Capability, UserId};

/// Carries `users.activity` and `activity.publish`.
pub const TEST_TOKEN: &str = "test-token";
/// Valid token without any capability.
pub const NO_ACTIVITY_TOKEN: &str = "no-activity";
/// Only `activity.publish`.
pub const PUBLISHER_TOKEN: &str = "publisher";

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            TEST_TOKEN => Ok(admin_user()),
            NO_ACTIVITY_TOKEN => Ok(user_without_capabilities()),
            PUBLISHER_TOKEN => Ok(user_with(
                3,
                "publisher",
                [Capability::new("activity", "publish")],
            )),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

fn user_with<const N: usize>(
    id: i64,
    username: &str,
    capabilities: [Capability; N],
) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        capabilities: HashSet::from(capabilities),
    }
}

pub fn admin_user() -> AuthenticatedUser {
    user_with(
        1,
        "admin",
        [
            Capability::new("users", "activity"),
            Capability::new("activity", "publish"),
        ],
    )
}

pub fn user_without_capabilities() -> AuthenticatedUser {
    user_with(2, "plain", [])
}
