//! Domain entities - core business objects

mod user;
mod webinar;

pub use user::User;
pub use webinar::Webinar;
