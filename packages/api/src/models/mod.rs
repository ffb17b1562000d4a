//! Response bodies of the backend endpoints.

mod responses;

pub use responses::{LoginResponse, TeamsResponse, TokenResponse};
