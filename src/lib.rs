//! Books API
//!
//! A small REST JSON API serving an in-memory catalog of books.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
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

impl AppState {
    /// Build the state, seeding the book store when `store.seed` is set
    pub fn new(config: AppConfig) -> Self {
        let repository = if config.store.seed {
            repository::Repository::new()
        } else {
            repository::Repository::empty()
        };

        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
