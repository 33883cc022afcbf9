// src/application/commands/activity/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::activity::ActivityStore};

pub struct ActivityCommandService {
    pub(super) store: Arc<dyn ActivityStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ActivityCommandService {
    pub fn new(store: Arc<dyn ActivityStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}
