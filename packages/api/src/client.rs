//! `reqwest`-backed implementation of [`PortalApi`].

use serde::de::DeserializeOwned;

use crate::endpoints::{join_url, Endpoints};
use crate::error::ApiError;
use crate::models::{LoginResponse, TeamsResponse, TokenResponse};
use crate::PortalApi;

/// HTTP client for the portal backend.
///
/// `base_url` is the origin the backend is served from (on the web this is the
/// page's own origin, since the portal and its backend share a host).
#[derive(Clone, Debug)]
pub struct HttpPortalApi {
    client: reqwest::Client,
    base_url: String,
    endpoints: Endpoints,
}

impl HttpPortalApi {
    pub fn new(base_url: impl Into<String>, endpoints: Endpoints) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            endpoints,
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

/// Turn a response into a decoded body, or the matching [`ApiError`].
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = error_detail(&body);
        tracing::warn!(
            status = status.as_u16(),
            detail = detail.as_deref().unwrap_or(""),
            "backend returned an error status"
        );
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        });
    }
    response.json::<T>().await.map_err(ApiError::decode)
}

/// Pull the `error` (or `message`) field out of an error body, if it is JSON.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .or_else(|| value.get("message"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

impl PortalApi for HttpPortalApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        tracing::debug!(username, "POST {}", self.endpoints.login);
        let response = self
            .client
            .post(self.url(&self.endpoints.login))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(ApiError::transport)?;
        decode(response).await
    }

    async fn fetch_teams(&self, username: &str) -> Result<TeamsResponse, ApiError> {
        tracing::debug!(username, "GET {}", self.endpoints.fetch_teams);
        let response = self
            .client
            .get(self.url(&self.endpoints.fetch_teams))
            .query(&[("username", username)])
            .send()
            .await
            .map_err(ApiError::transport)?;
        decode(response).await
    }

    async fn generate_token(
        &self,
        team: &str,
        username: &str,
        email: &str,
    ) -> Result<TokenResponse, ApiError> {
        tracing::debug!(team, username, "GET {}", self.endpoints.generate_token);
        let response = self
            .client
            .get(self.url(&self.endpoints.generate_token))
            .query(&[("team", team), ("username", username), ("email", email)])
            .send()
            .await
            .map_err(ApiError::transport)?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_prefers_error_field() {
        assert_eq!(
            error_detail(r#"{"error": "Team is required", "message": "x"}"#).as_deref(),
            Some("Team is required")
        );
        assert_eq!(
            error_detail(r#"{"success": false, "message": "Username and password are required"}"#)
                .as_deref(),
            Some("Username and password are required")
        );
    }

    #[test]
    fn test_error_detail_non_json() {
        assert!(error_detail("<html>502 Bad Gateway</html>").is_none());
        assert!(error_detail("").is_none());
    }

    #[test]
    fn test_urls_resolve_against_base() {
        let api = HttpPortalApi::new("http://portal.local:5000/", Endpoints::default());
        assert_eq!(
            api.url(&api.endpoints.generate_token),
            "http://portal.local:5000/api/generate_token"
        );
    }
}
