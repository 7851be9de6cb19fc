// Articles platform - content publishing service

pub mod app_state;
pub mod auth;
pub mod config;
pub mod data_seeder;
pub mod database;
pub mod error;
pub mod models;
pub mod notifier;
pub mod routes;
pub mod services;

// Re-exports for convenience
pub use error::{AppError, AppResult};
