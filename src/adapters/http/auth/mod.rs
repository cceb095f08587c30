//! HTTP adapter for login/logout.

mod dto;
mod handlers;
mod routes;

pub use dto::{LoginRequest, LoginResponse};
pub use handlers::AuthHandlers;
pub use routes::{login_routes, logout_routes};
