//! Database models - SQLx-compatible structs for PostgreSQL tables

mod webinar;

pub use webinar::WebinarModel;
