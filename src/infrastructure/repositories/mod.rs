// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_activity;
mod postgres_user_directory;

pub(crate) use error::map_sqlx;
pub use postgres_activity::PostgresActivityStore;
pub use postgres_user_directory::PostgresUserDirectory;
