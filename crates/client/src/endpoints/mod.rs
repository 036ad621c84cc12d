//! REST API endpoint implementations.

mod auth;
mod request;
mod resources;

pub use auth::login;
pub use request::send_request_with_retry;
pub use resources::get_all;
