//! Token page route.

use dioxus::prelude::*;
use ui::views::TokenView;

#[component]
pub fn GetToken() -> Element {
    rsx! {
        TokenView {}
    }
}
