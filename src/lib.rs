//! Libretto - Library Catalog Admin Client
//!
//! A typed, headless client for the library manager REST API: data-binding
//! primitives coupling async requests to observable load/error/data state,
//! plus view controllers for the book, user, and lease admin screens.

use std::sync::Arc;

pub mod binding;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod models;
pub mod notify;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use http::{HttpClient, HttpMethod};

/// Shared handles every view controller is built from
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub http: HttpClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let http = HttpClient::from_config(&config.api);
        Self {
            config: Arc::new(config),
            http,
        }
    }
}
