// src/domain/user/mod.rs
pub mod directory;
pub mod value_objects;

pub use directory::{UserDirectory, UserSummary};
pub use value_objects::{Capability, UserId};
