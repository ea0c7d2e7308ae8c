//! Campusfix Maintenance Helpdesk
//!
//! A Rust implementation of the campus maintenance-request server:
//! students file free-text issues, the intake engine classifies them and
//! dispatches an available technician, and staff drive each request
//! through its lifecycle over a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod intake;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
