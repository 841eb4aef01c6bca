//! Core validation, caching and provider abstractions

pub mod cache;
pub mod config;
pub mod error;
pub mod log;
pub mod rates;
pub mod validate;

// Re-export main types for cleaner imports
pub use cache::Cache;
pub use config::AppConfig;
pub use error::ApiError;
pub use rates::RateProvider;
