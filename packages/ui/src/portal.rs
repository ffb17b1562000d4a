//! Portal context: configuration, backend client, and the in-memory session.

use api::HttpPortalApi;
use dioxus::prelude::*;
use flow::PortalConfig;

/// Everything the views need to talk to the backend.
#[derive(Clone, Debug)]
pub struct Portal {
    pub config: PortalConfig,
    pub api: HttpPortalApi,
}

impl Portal {
    pub fn new(config: PortalConfig, base_url: String) -> Self {
        let api = HttpPortalApi::new(base_url, config.endpoints.clone());
        Self { config, api }
    }
}

/// Identity carried from the login page to the token page.
///
/// Lives only in memory: a full page reload starts empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub username: Option<String>,
}

pub fn use_portal() -> Signal<Portal> {
    use_context::<Signal<Portal>>()
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provides [`Portal`] and [`SessionState`] to everything below it.
#[component]
pub fn PortalProvider(config: PortalConfig, base_url: String, children: Element) -> Element {
    let portal = use_signal(move || {
        tracing::info!(%base_url, "portal backend");
        Portal::new(config, base_url)
    });
    let session = use_signal(SessionState::default);

    use_context_provider(|| portal);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
