use crate::application::dto::NavigationItem;
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/navigation",
    responses(
        (status = 200, description = "Sidebar entries visible to the caller.", body = [NavigationItem]),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Navigation"
)]
pub async fn sidebar(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> Json<Vec<NavigationItem>> {
    Json(state.services.sidebar_items_for(&actor))
}
