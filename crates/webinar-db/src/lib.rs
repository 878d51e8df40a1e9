//! # webinar-db
//!
//! Storage adapters implementing [`webinar_core::WebinarRepository`].
//!
//! ## Overview
//!
//! - Connection pool management and migrations for PostgreSQL
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - `PgWebinarRepository` (durable) and `InMemoryWebinarRepository` (tests, local runs)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use webinar_db::pool::{create_pool, DatabaseConfig};
//! use webinar_db::repositories::PgWebinarRepository;
//! use webinar_core::WebinarRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let webinar_repo = PgWebinarRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{InMemoryWebinarRepository, PgWebinarRepository};
