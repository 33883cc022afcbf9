// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod stores;
pub mod time;
pub mod users;

pub use security::{
    DummyTokenManager, NO_ACTIVITY_TOKEN, PUBLISHER_TOKEN, TEST_TOKEN, admin_user, user_without_capabilities,
};
pub use stores::{FailingActivityStore, InMemoryActivityStore};
pub use time::{DummyClock, SteppingClock, fixed_now};
pub use users::InMemoryUserDirectory;
