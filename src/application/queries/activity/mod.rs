mod common;
mod list;
mod panel;
mod service;

pub use list::{ListActivityQuery, ListUserActivityQuery};
pub use service::ActivityQueryService;
