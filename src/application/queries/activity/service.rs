use std::sync::Arc;

use crate::domain::{activity::ActivityStore, user::UserDirectory};

pub struct ActivityQueryService {
    pub(super) store: Arc<dyn ActivityStore>,
    pub(super) users: Arc<dyn UserDirectory>,
    pub(super) panel_limit: u32,
}

impl ActivityQueryService {
    pub const DEFAULT_PANEL_LIMIT: u32 = 10;

    pub fn new(store: Arc<dyn ActivityStore>, users: Arc<dyn UserDirectory>) -> Self {
        Self {
            store,
            users,
            panel_limit: Self::DEFAULT_PANEL_LIMIT,
        }
    }

    /// Number of records shown in a user's activity panel.
    pub fn with_panel_limit(mut self, panel_limit: u32) -> Self {
        self.panel_limit = panel_limit.max(1);
        self
    }
}
