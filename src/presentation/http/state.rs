// src/presentation/http/state.rs
use crate::application::{events::EventDispatcher, services::ApplicationServices};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub events: Arc<EventDispatcher>,
}
