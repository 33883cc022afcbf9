use super::ActivityQueryService;
use crate::{
    application::{
        capabilities,
        dto::{ActivityDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        activity::ActivityRecord,
        user::{UserId, UserSummary},
    },
};
use std::collections::{BTreeSet, HashMap};

pub(super) fn ensure_activity_capability(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    let (resource, action) = capabilities::USERS_ACTIVITY;
    if actor.has_capability(resource, action) {
        Ok(())
    } else {
        Err(ApplicationError::missing_capability(resource, action))
    }
}

impl ActivityQueryService {
    /// Resolve a user or fail with `NotFound`.
    pub(super) async fn require_user(&self, user_id: i64) -> ApplicationResult<UserSummary> {
        let id = UserId::new(user_id).map_err(ApplicationError::from)?;
        self.users
            .find_by_id(id)
            .await
            .map_err(ApplicationError::from)?
            .ok_or_else(|| ApplicationError::not_found(format!("user {user_id} not found")))
    }

    /// Attach the acting user's name to each record, one directory lookup per page.
    pub(super) async fn to_dtos(
        &self,
        records: Vec<ActivityRecord>,
    ) -> ApplicationResult<Vec<ActivityDto>> {
        let ids: Vec<UserId> = records
            .iter()
            .map(ActivityRecord::user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let names: HashMap<UserId, String> = self
            .users
            .find_many(&ids)
            .await
            .map_err(ApplicationError::from)?
            .into_iter()
            .map(|user| (user.id, user.username))
            .collect();

        Ok(records
            .into_iter()
            .map(|record| {
                let name = names.get(&record.user_id()).cloned();
                ActivityDto::from_record(record, name)
            })
            .collect())
    }
}
