//! Endpoint paths of the backend collaborator.

use serde::{Deserialize, Serialize};

/// Paths of the three backend endpoints, relative to the portal origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default = "default_login")]
    pub login: String,
    #[serde(default = "default_fetch_teams")]
    pub fetch_teams: String,
    #[serde(default = "default_generate_token")]
    pub generate_token: String,
}

fn default_login() -> String {
    "/login".to_string()
}

fn default_fetch_teams() -> String {
    "/api/fetch_teams".to_string()
}

fn default_generate_token() -> String {
    "/api/generate_token".to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login: default_login(),
            fetch_teams: default_fetch_teams(),
            generate_token: default_generate_token(),
        }
    }
}

/// Join a base URL and an endpoint path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
