// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::activity::ActivityCommandService,
        dto::{AuthenticatedUser, NavigationItem},
        error::ApplicationError,
        events::{
            EventDispatcher, PermissionEventsSubscriber, RoleEventsSubscriber,
            UserEventsSubscriber,
        },
        ports::{security::TokenManager, time::Clock},
        queries::activity::ActivityQueryService,
    },
    domain::{activity::ActivityStore, user::UserDirectory},
};

/// Everything the activity log needs, wired by hand at process start.
pub struct ApplicationServices {
    pub activity_commands: Arc<ActivityCommandService>,
    pub activity_queries: Arc<ActivityQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        store: Arc<dyn ActivityStore>,
        user_directory: Arc<dyn UserDirectory>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        panel_limit: u32,
    ) -> Self {
        let activity_commands = Arc::new(ActivityCommandService::new(
            Arc::clone(&store),
            Arc::clone(&clock),
        ));
        let activity_queries = Arc::new(
            ActivityQueryService::new(Arc::clone(&store), Arc::clone(&user_directory))
                .with_panel_limit(panel_limit),
        );

        Self {
            activity_commands,
            activity_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// A dispatcher with the user, role and permission subscribers registered.
    pub fn event_dispatcher(&self) -> EventDispatcher {
        let commands = &self.activity_commands;
        let mut dispatcher = EventDispatcher::new();
        dispatcher
            .register(Arc::new(UserEventsSubscriber::new(Arc::clone(commands))))
            .register(Arc::new(RoleEventsSubscriber::new(Arc::clone(commands))))
            .register(Arc::new(PermissionEventsSubscriber::new(Arc::clone(
                commands,
            ))));
        dispatcher
    }

    /// Navigation entry contributed by the activity log.
    pub fn sidebar_item(&self) -> NavigationItem {
        NavigationItem::activity_log()
    }

    /// Navigation entries the caller is allowed to see.
    pub fn sidebar_items_for(&self, actor: &AuthenticatedUser) -> Vec<NavigationItem> {
        let item = self.sidebar_item();
        if item.is_visible_to(actor) {
            vec![item]
        } else {
            Vec::new()
        }
    }

    /// Authenticate a raw bearer token and ensure the subject has the
    /// specified capability.
    pub async fn authenticate_and_authorize(
        &self,
        token: &str,
        resource: &str,
        action: &str,
    ) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;

        if user.has_capability(resource, action) {
            Ok(user)
        } else {
            Err(ApplicationError::missing_capability(resource, action))
        }
    }
}
