pub mod activity;
pub mod errors;
pub mod events;
pub mod user;
