//! Business logic services
//!
//! Use cases that validate commands against the domain rules and delegate
//! persistence to the repository held by the [`ServiceContext`].

pub mod context;
pub mod error;
pub mod webinar;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use webinar::{ChangeSeatsCommand, CreateWebinarCommand, WebinarService};
