//! # webinar-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, JwtService};
pub use config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, HttpConfig, JwtConfig,
    ServerConfig, StorageBackend,
};
pub use error::{domain_status_code, AppError, ErrorResponse};
pub use telemetry::{init_tracing, TracingConfig, TracingError};
