//! Athenaeum Library Catalog
//!
//! A server-rendered Rust web application for managing a small library
//! catalog: authors, genres, books, and the physical copies of each book.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod pages;
pub mod repository;
pub mod store;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use store::CatalogStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn CatalogStore>,
}
