pub mod activity;
pub mod auth;
pub mod navigation;
pub mod pagination;
pub mod serde_time;
pub mod users;

pub use activity::{ActivityDto, UserActivityPanelDto};
pub use auth::AuthenticatedUser;
pub use navigation::NavigationItem;
pub use pagination::PaginatedResult;
pub use users::{CapabilityView, UserSummaryDto};
