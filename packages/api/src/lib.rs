//! # API crate: backend contracts for the team token portal
//!
//! The portal frontend talks to three backend endpoints it does not implement.
//! This crate pins down their wire shapes and provides the client that calls them.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | JSON bodies returned by `/login`, `/api/fetch_teams` and `/api/generate_token` |
//! | [`endpoints`] | Endpoint paths, overridable from the portal configuration |
//! | [`error`] | [`ApiError`]: the transport/decoding failures a call can end in |
//! | [`client`] | [`HttpPortalApi`]: the `reqwest`-backed implementation of [`PortalApi`] |
//!
//! Application-level failures (`error` or `success: false` inside a 2xx body) are
//! *not* errors at this layer. They come back as `Ok(body)` and the flow reducers
//! decide how to present them.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::HttpPortalApi;
pub use endpoints::Endpoints;
pub use error::ApiError;
pub use models::{LoginResponse, TeamsResponse, TokenResponse};

/// The three backend calls the portal makes.
///
/// Implemented over HTTP by [`HttpPortalApi`]; tests substitute scripted doubles.
/// Futures are not required to be `Send`: everything runs on the single-threaded
/// browser event loop.
#[allow(async_fn_in_trait)]
pub trait PortalApi {
    /// `POST /login` with form fields `username` and `password`.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// `GET /api/fetch_teams?username=...`
    async fn fetch_teams(&self, username: &str) -> Result<TeamsResponse, ApiError>;

    /// `GET /api/generate_token?team=...&username=...&email=...`
    async fn generate_token(
        &self,
        team: &str,
        username: &str,
        email: &str,
    ) -> Result<TokenResponse, ApiError>;
}
