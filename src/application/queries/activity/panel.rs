use super::{ActivityQueryService, common};
use crate::{
    application::{
        dto::{ActivityDto, AuthenticatedUser, UserActivityPanelDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::activity::PageRequest,
};

impl ActivityQueryService {
    /// Most recent records of a user, fetched by the user detail page before
    /// it renders.
    pub async fn recent_for_user(
        &self,
        actor: &AuthenticatedUser,
        user_id: i64,
    ) -> ApplicationResult<UserActivityPanelDto> {
        common::ensure_activity_capability(actor)?;
        let user = self.require_user(user_id).await?;

        let page = self
            .store
            .list_for_user(user.id, PageRequest::first(self.panel_limit))
            .await
            .map_err(ApplicationError::from)?;
        let activities = page
            .items
            .into_iter()
            .map(|record| ActivityDto::from_record(record, Some(user.username.clone())))
            .collect();

        Ok(UserActivityPanelDto {
            user: user.into(),
            activities,
        })
    }
}
