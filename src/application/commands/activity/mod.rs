// src/application/commands/activity/mod.rs
mod record;
mod service;

pub use record::RecordActivityCommand;
pub use service::ActivityCommandService;
