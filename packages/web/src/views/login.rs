//! Login page route.

use dioxus::prelude::*;
use ui::views::LoginView;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView { on_navigate: move |path: String| crate::navigate_to(nav, &path) }
    }
}
