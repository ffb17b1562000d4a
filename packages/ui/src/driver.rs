//! Signal-backed drivers for the flow reducers.
//!
//! A driver owns the flow signal. `send` runs the reducer, stores the new flow
//! value, and spawns one task per effect; whatever event an effect produces is
//! sent back through the same driver.

use dioxus::prelude::*;
use flow::{login, run_login_effect, run_token_effect, token};
use flow::{LoginEvent, LoginFlow, TokenEvent, TokenFlow};

use crate::platform::BrowserPlatform;
use crate::portal::{Portal, SessionState};

#[derive(Clone, Copy, PartialEq)]
pub struct TokenDriver {
    pub flow: Signal<TokenFlow>,
    portal: Signal<Portal>,
    platform: BrowserPlatform,
}

impl TokenDriver {
    pub fn send(self, event: TokenEvent) {
        let portal = self.portal.peek().clone();
        let (next, effects) = token::update(&self.flow.peek(), &portal.config, event);
        let mut flow = self.flow;
        flow.set(next);

        for effect in effects {
            let portal = portal.clone();
            spawn(async move {
                if let Some(event) = run_token_effect(&portal.api, &self.platform, effect).await {
                    self.send(event);
                }
            });
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct LoginDriver {
    pub flow: Signal<LoginFlow>,
    portal: Signal<Portal>,
    session: Signal<SessionState>,
    platform: BrowserPlatform,
}

impl LoginDriver {
    pub fn send(self, event: LoginEvent) {
        let portal = self.portal.peek().clone();
        let (next, effects) = login::update(&self.flow.peek(), &portal.config, event);

        if next.authenticated.is_some() && next.authenticated != self.session.peek().username {
            let mut session = self.session;
            session.set(SessionState {
                username: next.authenticated.clone(),
            });
        }
        let mut flow = self.flow;
        flow.set(next);

        for effect in effects {
            let portal = portal.clone();
            spawn(async move {
                if let Some(event) = run_login_effect(&portal.api, &self.platform, effect).await {
                    self.send(event);
                }
            });
        }
    }
}

/// Token page driver; the identity input starts from the session, if any.
pub fn use_token_driver() -> TokenDriver {
    let portal = crate::portal::use_portal();
    let session = crate::portal::use_session();
    let flow = use_signal(|| {
        TokenFlow::with_username(session.peek().username.clone().unwrap_or_default())
    });
    let platform = use_hook(BrowserPlatform::default);
    TokenDriver {
        flow,
        portal,
        platform,
    }
}

/// Login page driver; `on_navigate` receives the post-login destination.
pub fn use_login_driver(on_navigate: EventHandler<String>) -> LoginDriver {
    let portal = crate::portal::use_portal();
    let session = crate::portal::use_session();
    let flow = use_signal(LoginFlow::default);
    let platform = use_hook(|| BrowserPlatform::new(on_navigate));
    LoginDriver {
        flow,
        portal,
        session,
        platform,
    }
}
