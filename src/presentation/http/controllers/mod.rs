// src/presentation/http/controllers/mod.rs
pub mod activity;
pub mod events;
pub mod navigation;
