//! Login page.

use dioxus::prelude::*;
use flow::{LoginEvent, LOGIN_LABELS};

use crate::components::{Input, Label};
use crate::driver::use_login_driver;
use crate::{GateButton, OutcomeBanner};

/// Username/password form. After a successful login the flow waits briefly
/// on the success label, then asks `on_navigate` to open the token page.
#[component]
pub fn LoginView(
    #[props(default = "Team Token Portal".to_string())] title: String,
    on_navigate: EventHandler<String>,
) -> Element {
    let driver = use_login_driver(on_navigate);
    let flow = driver.flow.read().clone();
    let notice = flow.notices.current().cloned();
    let busy = !flow.can_submit();

    rsx! {
        div { class: "portal-page",
            form {
                class: "portal-card",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    driver.send(LoginEvent::Submit);
                },
                h1 { class: "portal-title", "{title}" }

                OutcomeBanner { notice }

                div { class: "field",
                    Label { html_for: "username", "Username" }
                    Input {
                        id: "username",
                        autocomplete: "username",
                        disabled: busy,
                        value: flow.username.clone(),
                        oninput: move |evt: FormEvent| {
                            driver.send(LoginEvent::UsernameEdited(evt.value()));
                        },
                    }
                }

                div { class: "field",
                    Label { html_for: "password", "Password" }
                    Input {
                        id: "password",
                        r#type: "password",
                        autocomplete: "current-password",
                        disabled: busy,
                        value: flow.password.clone(),
                        oninput: move |evt: FormEvent| {
                            driver.send(LoginEvent::PasswordEdited(evt.value()));
                        },
                    }
                }

                GateButton { gate: flow.gate.clone(), labels: LOGIN_LABELS, r#type: "submit" }
            }
        }
    }
}
