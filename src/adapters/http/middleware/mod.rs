//! HTTP middleware.

mod auth;

pub use auth::{session_middleware, RequireSession};
