use super::{auth::AuthenticatedUser, users::CapabilityView};
use crate::application::capabilities;
use crate::domain::user::Capability;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sidebar entry contributed to the host's navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavigationItem {
    pub label: String,
    pub route: String,
    pub icon: String,
    /// Route pattern that marks the item as active.
    pub active: String,
    pub permission: CapabilityView,
}

impl NavigationItem {
    pub fn activity_log() -> Self {
        let (resource, action) = capabilities::USERS_ACTIVITY;
        Self {
            label: "Activity Log".into(),
            route: "/activity".into(),
            icon: "fas fa-server".into(),
            active: "activity*".into(),
            permission: Capability::new(resource, action).into(),
        }
    }

    pub fn is_visible_to(&self, actor: &AuthenticatedUser) -> bool {
        actor.has_capability(&self.permission.resource, &self.permission.action)
    }
}
