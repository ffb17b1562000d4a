//! # Login flow reducer
//!
//! `update(&flow, config, event)` returns the next flow value and the effects the
//! runtime has to execute. The reducer never performs I/O.
//!
//! ```text
//! Submit --(empty field)--> local error, no request
//!        --> gate Busy, Login effect
//! LoginFinished --(ok, success)--> gate Succeeded, Redirect timer
//!               --(anything else)--> gate Ready, error notice
//! Redirect timer --> Navigate(token page)
//! ```

use std::fmt;
use std::time::Duration;

use api::{ApiError, LoginResponse};

use crate::config::PortalConfig;
use crate::gate::RequestGate;
use crate::messages;
use crate::reporter::{NoticeId, OutcomeReporter};
use crate::task::{RequestId, RequestSeq};

/// State of the login form.
#[derive(Clone, Default, PartialEq)]
pub struct LoginFlow {
    pub username: String,
    pub password: String,
    pub gate: RequestGate,
    pub notices: OutcomeReporter,
    /// Username the backend accepted; handed to the token page.
    pub authenticated: Option<String>,
    pending: Option<RequestId>,
    requests: RequestSeq,
}

#[derive(Clone, PartialEq)]
pub enum LoginEvent {
    UsernameEdited(String),
    PasswordEdited(String),
    Submit,
    LoginFinished {
        request: RequestId,
        result: Result<LoginResponse, ApiError>,
    },
    Timer(LoginTimer),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginTimer {
    HideNotice(NoticeId),
    Redirect { epoch: u64 },
}

#[derive(Clone, PartialEq)]
pub enum LoginEffect {
    Login {
        request: RequestId,
        username: String,
        password: String,
    },
    Navigate {
        path: String,
    },
    Schedule {
        after: Duration,
        timer: LoginTimer,
    },
}

const REDACTED: &str = "<redacted>";

// Hand-written Debug impls below keep the password out of logs.

impl fmt::Debug for LoginFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginFlow")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .field("gate", &self.gate)
            .field("notices", &self.notices)
            .field("authenticated", &self.authenticated)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for LoginEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UsernameEdited(value) => f.debug_tuple("UsernameEdited").field(value).finish(),
            Self::PasswordEdited(_) => f.debug_tuple("PasswordEdited").field(&REDACTED).finish(),
            Self::Submit => f.write_str("Submit"),
            Self::LoginFinished { request, result } => f
                .debug_struct("LoginFinished")
                .field("request", request)
                .field("result", result)
                .finish(),
            Self::Timer(timer) => f.debug_tuple("Timer").field(timer).finish(),
        }
    }
}

impl fmt::Debug for LoginEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login {
                request, username, ..
            } => f
                .debug_struct("Login")
                .field("request", request)
                .field("username", username)
                .field("password", &REDACTED)
                .finish(),
            Self::Navigate { path } => f.debug_struct("Navigate").field("path", path).finish(),
            Self::Schedule { after, timer } => f
                .debug_struct("Schedule")
                .field("after", after)
                .field("timer", timer)
                .finish(),
        }
    }
}

impl LoginFlow {
    pub fn can_submit(&self) -> bool {
        self.gate.is_ready()
    }

    fn report_error(&mut self, config: &PortalConfig, message: impl Into<String>) -> LoginEffect {
        let id = self.notices.error(message);
        LoginEffect::Schedule {
            after: config.timing.error_display(),
            timer: LoginTimer::HideNotice(id),
        }
    }
}

/// The login reducer.
pub fn update(
    flow: &LoginFlow,
    config: &PortalConfig,
    event: LoginEvent,
) -> (LoginFlow, Vec<LoginEffect>) {
    let mut next = flow.clone();
    let mut effects = Vec::new();

    match event {
        LoginEvent::UsernameEdited(value) => {
            next.username = value;
            next.notices.dismiss_error();
        }
        LoginEvent::PasswordEdited(value) => {
            next.password = value;
            next.notices.dismiss_error();
        }
        LoginEvent::Submit => {
            let username = next.username.trim().to_string();
            if username.is_empty() || next.password.is_empty() {
                effects.push(next.report_error(config, messages::CREDENTIALS_REQUIRED));
            } else if next.gate.begin() {
                let request = next.requests.next_id();
                next.pending = Some(request);
                next.notices.dismiss_error();
                tracing::debug!(request = request.0, %username, "login submitted");
                effects.push(LoginEffect::Login {
                    request,
                    username,
                    password: next.password.clone(),
                });
            }
        }
        LoginEvent::LoginFinished { request, result } => {
            if next.pending != Some(request) {
                tracing::debug!(request = request.0, "dropping stale login response");
                return (next, effects);
            }
            next.pending = None;
            match result {
                Ok(LoginResponse { success: true, .. }) => {
                    let username = next.username.trim().to_string();
                    tracing::info!(%username, "login succeeded");
                    let epoch = next.gate.succeed();
                    next.notices.success(messages::LOGIN_SUCCEEDED);
                    next.authenticated = Some(username);
                    effects.push(LoginEffect::Schedule {
                        after: config.timing.success_display(),
                        timer: LoginTimer::Redirect { epoch },
                    });
                }
                Ok(LoginResponse { message, .. }) => {
                    tracing::warn!("login rejected: {}", message.as_deref().unwrap_or(""));
                    next.gate.reset();
                    let message = message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| messages::LOGIN_FAILED.to_string());
                    effects.push(next.report_error(config, message));
                }
                Err(e) => {
                    tracing::error!("login request failed: {} ({})", e, e.detail().unwrap_or(""));
                    next.gate.reset();
                    effects.push(next.report_error(config, messages::LOGIN_FAILED));
                }
            }
        }
        LoginEvent::Timer(LoginTimer::HideNotice(id)) => {
            next.notices.expire(id);
        }
        LoginEvent::Timer(LoginTimer::Redirect { epoch }) => {
            if next.gate.epoch() == epoch {
                effects.push(LoginEffect::Navigate {
                    path: config.navigation.token_page.clone(),
                });
            }
        }
    }

    (next, effects)
}
