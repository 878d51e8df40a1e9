//! Repository implementations
//!
//! Implementations of the repository traits defined in webinar-core.

mod error;
mod memory;
mod webinar;

pub use memory::InMemoryWebinarRepository;
pub use webinar::PgWebinarRepository;
