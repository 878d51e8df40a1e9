//! # webinar-service
//!
//! Application layer containing the webinar use cases, their context, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ChangeSeatsRequest, CreateWebinarRequest, HealthResponse, MessageResponse, ReadinessResponse,
    WebinarResponse,
};
pub use services::{
    ChangeSeatsCommand, CreateWebinarCommand, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, WebinarService,
};
