use super::{ActivityQueryService, common};
use crate::{
    application::{
        dto::{ActivityDto, AuthenticatedUser, PaginatedResult},
        error::{ApplicationError, ApplicationResult},
    },
    domain::activity::PageRequest,
};

pub struct ListActivityQuery {
    pub page: u32,
    pub page_size: u32,
}

pub struct ListUserActivityQuery {
    pub user_id: i64,
    pub page: u32,
    pub page_size: u32,
}

impl ActivityQueryService {
    /// Global feed across all users, newest first.
    pub async fn list_all(
        &self,
        actor: &AuthenticatedUser,
        query: ListActivityQuery,
    ) -> ApplicationResult<PaginatedResult<ActivityDto>> {
        common::ensure_activity_capability(actor)?;
        let request = PageRequest::new(query.page, query.page_size);

        let page = self
            .store
            .list_all(request)
            .await
            .map_err(ApplicationError::from)?;
        let items = self.to_dtos(page.items).await?;
        Ok(PaginatedResult::new(
            items,
            page.total,
            request.page(),
            request.page_size(),
        ))
    }

    /// Feed of a single user. Unknown users are reported as `NotFound`; a
    /// known user without activity yields an empty page.
    pub async fn list_for_user(
        &self,
        actor: &AuthenticatedUser,
        query: ListUserActivityQuery,
    ) -> ApplicationResult<PaginatedResult<ActivityDto>> {
        common::ensure_activity_capability(actor)?;
        let user = self.require_user(query.user_id).await?;
        let request = PageRequest::new(query.page, query.page_size);

        let page = self
            .store
            .list_for_user(user.id, request)
            .await
            .map_err(ApplicationError::from)?;
        let items = page
            .items
            .into_iter()
            .map(|record| ActivityDto::from_record(record, Some(user.username.clone())))
            .collect();
        Ok(PaginatedResult::new(
            items,
            page.total,
            request.page(),
            request.page_size(),
        ))
    }
}
