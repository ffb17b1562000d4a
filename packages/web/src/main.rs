use dioxus::prelude::*;
use dioxus::router::Navigator;

use flow::PortalConfig;
use ui::PortalProvider;
use views::{GetToken, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/getToken")]
    GetToken {},
}

const PORTAL_TOML: &str = include_str!("../portal.toml");

fn main() {
    dioxus::launch(App);
}

/// Origin the backend is served from; the portal is hosted by the backend.
fn backend_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    "http://localhost:5000".to_string()
}

#[component]
fn App() -> Element {
    let config = PortalConfig::from_toml_or_default(PORTAL_TOML);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::PORTAL_CSS }

        PortalProvider { config, base_url: backend_origin(),
            Router::<Route> {}
        }
    }
}

/// Follow a path produced by a flow. Routes the app knows stay client-side;
/// anything else is a full page load.
fn navigate_to(nav: Navigator, path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(_) => {
            tracing::debug!(path, "leaving the app");
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(path);
                }
            }
        }
    }
}
