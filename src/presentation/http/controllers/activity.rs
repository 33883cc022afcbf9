use crate::application::dto::{ActivityDto, PaginatedResult, UserActivityPanelDto};
use crate::application::queries::activity::{ListActivityQuery, ListUserActivityQuery};
use crate::domain::activity::PageRequest;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActivityPageParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size", alias = "pageSize")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    PageRequest::DEFAULT_PAGE_SIZE
}

#[utoipa::path(
    get,
    path = "/activity",
    params(ActivityPageParams),
    responses(
        (status = 200, description = "Activity of all users, newest first.", body = PaginatedResult<ActivityDto>),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing users.activity capability.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Activity"
)]
pub async fn list_activity(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<ActivityPageParams>,
) -> HttpResult<Json<PaginatedResult<ActivityDto>>> {
    let page = state
        .services
        .activity_queries
        .list_all(
            &actor,
            ListActivityQuery {
                page: params.page,
                page_size: params.page_size,
            },
        )
        .await
        .into_http()?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/activity/users/{id}",
    params(
        ("id" = i64, Path, description = "User id"),
        ActivityPageParams
    ),
    responses(
        (status = 200, description = "Activity of one user, newest first.", body = PaginatedResult<ActivityDto>),
        (status = 403, description = "Missing users.activity capability.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Activity"
)]
pub async fn list_user_activity(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(user_id): Path<i64>,
    Query(params): Query<ActivityPageParams>,
) -> HttpResult<Json<PaginatedResult<ActivityDto>>> {
    let page = state
        .services
        .activity_queries
        .list_for_user(
            &actor,
            ListUserActivityQuery {
                user_id,
                page: params.page,
                page_size: params.page_size,
            },
        )
        .await
        .into_http()?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/users/{id}/activity-panel",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Most recent activity for the user detail page.", body = UserActivityPanelDto),
        (status = 403, description = "Missing users.activity capability.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Activity"
)]
pub async fn user_activity_panel(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(user_id): Path<i64>,
) -> HttpResult<Json<UserActivityPanelDto>> {
    let panel = state
        .services
        .activity_queries
        .recent_for_user(&actor, user_id)
        .await
        .into_http()?;
    Ok(Json(panel))
}
