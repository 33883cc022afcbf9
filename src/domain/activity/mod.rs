pub mod entity;
pub mod pagination;
pub mod repository;

pub use entity::{ActivityId, ActivityRecord, Description, NewActivity};
pub use pagination::{ActivityPage, PageRequest};
pub use repository::ActivityStore;
