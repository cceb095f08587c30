//! HTTP DTOs for auth endpoints.

use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Bearer token for all subsequent requests.
    pub token: String,
}
