//! # Wire shapes of the backend endpoints
//!
//! Every field the backend may omit is optional here, so a body that carries only an
//! `error` (or only a `token`) still decodes. Unknown fields are ignored: the login
//! endpoint, for instance, also echoes `username`, `email` and `fullname`, which the
//! portal has no use for.

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /api/fetch_teams`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamsResponse {
    /// Team names in the order the server returned them.
    #[serde(default)]
    pub teams: Vec<String>,
    /// The email the backend resolved for the identity, when it did.
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `GET /api/generate_token`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
