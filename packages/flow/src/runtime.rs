//! # Effect runtime
//!
//! Executes the effects the reducers return and turns their outcomes back into
//! events. Network calls go through [`PortalApi`]; timers, the clipboard and
//! navigation go through [`Platform`], which the UI implements for the browser.
//!
//! Each effect runs independently: the UI spawns one task per effect and feeds
//! the returned event (if any) back into the reducer.

use std::time::Duration;

use api::PortalApi;

use crate::login::{LoginEffect, LoginEvent};
use crate::token::{TokenEffect, TokenEvent};

/// Browser capabilities the flows need.
#[allow(async_fn_in_trait)]
pub trait Platform {
    async fn sleep(&self, duration: Duration);

    /// Write `text` to the system clipboard. The error is a human-readable reason.
    async fn write_clipboard(&self, text: &str) -> Result<(), String>;

    fn navigate(&self, path: &str);
}

pub async fn run_login_effect<A: PortalApi, P: Platform>(
    api: &A,
    platform: &P,
    effect: LoginEffect,
) -> Option<LoginEvent> {
    match effect {
        LoginEffect::Login {
            request,
            username,
            password,
        } => {
            let result = api.login(&username, &password).await;
            Some(LoginEvent::LoginFinished { request, result })
        }
        LoginEffect::Navigate { path } => {
            tracing::info!(%path, "navigating");
            platform.navigate(&path);
            None
        }
        LoginEffect::Schedule { after, timer } => {
            platform.sleep(after).await;
            Some(LoginEvent::Timer(timer))
        }
    }
}

pub async fn run_token_effect<A: PortalApi, P: Platform>(
    api: &A,
    platform: &P,
    effect: TokenEffect,
) -> Option<TokenEvent> {
    match effect {
        TokenEffect::FetchTeams { request, username } => {
            let result = api.fetch_teams(&username).await;
            Some(TokenEvent::TeamsLoaded { request, result })
        }
        TokenEffect::GenerateToken {
            request,
            team,
            username,
            email,
        } => {
            let result = api.generate_token(&team, &username, &email).await;
            Some(TokenEvent::TokenLoaded { request, result })
        }
        TokenEffect::CopyToClipboard { text } => {
            let result = platform.write_clipboard(&text).await;
            Some(TokenEvent::CopyFinished(result))
        }
        TokenEffect::Schedule { after, timer } => {
            platform.sleep(after).await;
            Some(TokenEvent::Timer(timer))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use api::{ApiError, LoginResponse, TeamsResponse, TokenResponse};

    use super::*;
    use crate::config::PortalConfig;
    use crate::confirm::ModalMode;
    use crate::login::{self, LoginFlow};
    use crate::token::{self, TokenFlow, TokenTimer};

    /// Backend double answering from queued responses and recording calls.
    #[derive(Default)]
    struct ScriptedApi {
        logins: RefCell<VecDeque<Result<LoginResponse, ApiError>>>,
        teams: RefCell<VecDeque<Result<TeamsResponse, ApiError>>>,
        tokens: RefCell<VecDeque<Result<TokenResponse, ApiError>>>,
        calls: RefCell<Vec<String>>,
    }

    impl PortalApi for ScriptedApi {
        async fn login(&self, username: &str, _password: &str) -> Result<LoginResponse, ApiError> {
            self.calls.borrow_mut().push(format!("login {username}"));
            self.logins.borrow_mut().pop_front().expect("unexpected login call")
        }

        async fn fetch_teams(&self, username: &str) -> Result<TeamsResponse, ApiError> {
            self.calls.borrow_mut().push(format!("fetch_teams {username}"));
            self.teams.borrow_mut().pop_front().expect("unexpected fetch_teams call")
        }

        async fn generate_token(
            &self,
            team: &str,
            username: &str,
            email: &str,
        ) -> Result<TokenResponse, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("generate_token {team} {username} {email}"));
            self.tokens.borrow_mut().pop_front().expect("unexpected generate_token call")
        }
    }

    /// Platform double: sleeps return at once, durations and side effects are recorded.
    #[derive(Default)]
    struct RecordingPlatform {
        slept: RefCell<Vec<Duration>>,
        clipboard: RefCell<Option<String>>,
        navigated: RefCell<Vec<String>>,
        deny_clipboard: bool,
    }

    impl Platform for RecordingPlatform {
        async fn sleep(&self, duration: Duration) {
            self.slept.borrow_mut().push(duration);
        }

        async fn write_clipboard(&self, text: &str) -> Result<(), String> {
            if self.deny_clipboard {
                return Err("permission denied".to_string());
            }
            *self.clipboard.borrow_mut() = Some(text.to_string());
            Ok(())
        }

        fn navigate(&self, path: &str) {
            self.navigated.borrow_mut().push(path.to_string());
        }
    }

    /// Apply `event`, then run every resulting effect to completion, feeding the
    /// produced events back in. Timers listed in `hold` are not fired.
    async fn settle_token(
        api: &ScriptedApi,
        platform: &RecordingPlatform,
        flow: TokenFlow,
        event: TokenEvent,
        hold: fn(&TokenTimer) -> bool,
    ) -> TokenFlow {
        let config = PortalConfig::default();
        let mut flow = flow;
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            let (next, effects) = token::update(&flow, &config, event);
            flow = next;
            for effect in effects {
                if let TokenEffect::Schedule { timer, .. } = &effect {
                    if hold(timer) {
                        continue;
                    }
                }
                if let Some(event) = run_token_effect(api, platform, effect).await {
                    queue.push_back(event);
                }
            }
        }
        flow
    }

    fn hold_notices(timer: &TokenTimer) -> bool {
        matches!(timer, TokenTimer::HideNotice(_))
    }

    fn hold_all(_: &TokenTimer) -> bool {
        true
    }

    #[tokio::test]
    async fn test_token_page_end_to_end() {
        let api = ScriptedApi::default();
        api.teams.borrow_mut().push_back(Ok(TeamsResponse {
            teams: vec!["Backend".into(), "Administrators".into()],
            email: Some("bob@example.com".into()),
            error: None,
        }));
        api.tokens.borrow_mut().push_back(Ok(TokenResponse {
            token: Some("odt_123".into()),
            error: None,
        }));
        let platform = RecordingPlatform::default();

        let flow = TokenFlow::with_username("bob");
        let flow = settle_token(&api, &platform, flow, TokenEvent::FetchTeams, hold_notices).await;
        assert_eq!(flow.teams().len(), 2);
        assert!(flow.can_fetch(), "success label restored after its interval");

        let flow = settle_token(
            &api,
            &platform,
            flow,
            TokenEvent::TeamSelected(Some("Backend".into())),
            hold_notices,
        )
        .await;
        let flow =
            settle_token(&api, &platform, flow, TokenEvent::GenerateRequested, hold_notices).await;
        assert_eq!(
            flow.modal,
            Some(ModalMode::Proceed {
                team: "Backend".into()
            })
        );

        // Hold the timers so the shown token can be inspected.
        let flow = settle_token(&api, &platform, flow, TokenEvent::ConfirmAccepted, hold_all).await;
        assert_eq!(flow.token(), Some("odt_123"));

        let flow = settle_token(&api, &platform, flow, TokenEvent::CopyRequested, hold_notices).await;
        assert_eq!(platform.clipboard.borrow().as_deref(), Some("odt_123"));
        assert_eq!(flow.modal, Some(ModalMode::AcknowledgeSave));
        assert!(platform
            .slept
            .borrow()
            .contains(&Duration::from_millis(1000)));

        let flow = settle_token(&api, &platform, flow, TokenEvent::ConfirmAccepted, hold_notices).await;
        assert!(flow.token().is_none());
        assert!(flow.can_generate());

        assert_eq!(
            *api.calls.borrow(),
            vec![
                "fetch_teams bob".to_string(),
                "generate_token Backend bob bob@example.com".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_restricted_selection_makes_no_calls() {
        let api = ScriptedApi::default();
        api.teams.borrow_mut().push_back(Ok(TeamsResponse {
            teams: vec!["Backend".into(), "Administrators".into()],
            ..TeamsResponse::default()
        }));
        let platform = RecordingPlatform::default();

        let flow = TokenFlow::with_username("bob");
        let flow = settle_token(&api, &platform, flow, TokenEvent::FetchTeams, hold_all).await;
        let flow = settle_token(
            &api,
            &platform,
            flow,
            TokenEvent::TeamSelected(Some("Administrators".into())),
            hold_all,
        )
        .await;
        let flow =
            settle_token(&api, &platform, flow, TokenEvent::GenerateRequested, hold_all).await;
        assert!(flow.modal.is_none());
        assert!(!flow.can_generate());
        assert_eq!(api.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_error_banner_expires() {
        let api = ScriptedApi::default();
        let platform = RecordingPlatform::default();
        let flow = settle_token(
            &api,
            &platform,
            TokenFlow::default(),
            TokenEvent::FetchTeams,
            |_| false,
        )
        .await;
        assert!(flow.notices.current().is_none());
        assert_eq!(*platform.slept.borrow(), vec![Duration::from_millis(8000)]);
        assert!(api.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_clipboard_failure_reported() {
        let api = ScriptedApi::default();
        api.teams.borrow_mut().push_back(Ok(TeamsResponse {
            teams: vec!["Backend".into()],
            ..TeamsResponse::default()
        }));
        api.tokens.borrow_mut().push_back(Ok(TokenResponse {
            token: Some("odt_123".into()),
            error: None,
        }));
        let platform = RecordingPlatform {
            deny_clipboard: true,
            ..RecordingPlatform::default()
        };
        let mut flow = TokenFlow::with_username("bob");
        for event in [
            TokenEvent::FetchTeams,
            TokenEvent::TeamSelected(Some("Backend".into())),
            TokenEvent::GenerateRequested,
            TokenEvent::ConfirmAccepted,
            TokenEvent::CopyRequested,
        ] {
            flow = settle_token(&api, &platform, flow, event, hold_all).await;
        }
        assert_eq!(flow.token(), Some("odt_123"));
        assert!(flow.modal.is_none());
        assert_eq!(
            flow.notices.current().unwrap().message,
            crate::messages::COPY_FAILED
        );
    }

    #[tokio::test]
    async fn test_login_navigates_after_success() {
        let api = ScriptedApi::default();
        api.logins.borrow_mut().push_back(Ok(LoginResponse {
            success: true,
            message: Some("User 'bob' logged in".into()),
        }));
        let platform = RecordingPlatform::default();
        let config = PortalConfig::default();

        let mut flow = LoginFlow::default();
        let mut queue = VecDeque::from([
            LoginEvent::UsernameEdited("bob".into()),
            LoginEvent::PasswordEdited("hunter2".into()),
            LoginEvent::Submit,
        ]);
        while let Some(event) = queue.pop_front() {
            let (next, effects) = login::update(&flow, &config, event);
            flow = next;
            for effect in effects {
                if let Some(event) = run_login_effect(&api, &platform, effect).await {
                    queue.push_back(event);
                }
            }
        }

        assert_eq!(*platform.navigated.borrow(), vec!["/getToken".to_string()]);
        assert_eq!(*platform.slept.borrow(), vec![Duration::from_millis(2000)]);
        assert_eq!(flow.authenticated.as_deref(), Some("bob"));
        assert_eq!(*api.calls.borrow(), vec!["login bob".to_string()]);
    }
}
