use dioxus::prelude::*;
use flow::{RequestGate, COPY_LABELS};

use crate::components::ButtonVariant;
use crate::GateButton;

/// The generated token with its copy control. The token is shown once; the
/// save acknowledgement after copying clears it.
#[component]
pub fn TokenPanel(
    team: String,
    token: String,
    copy_gate: RequestGate,
    #[props(default)] copy_disabled: bool,
    on_copy: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "token-panel",
            h2 { class: "section-title", "Token for {team}" }
            p { class: "token-hint",
                "This token is shown only once. Copy it and store it somewhere safe."
            }
            div { class: "token-row",
                code { id: "token-value", class: "token-value", "{token}" }
                GateButton {
                    gate: copy_gate,
                    labels: COPY_LABELS,
                    variant: ButtonVariant::Outline,
                    disabled: copy_disabled,
                    onclick: move |_| on_copy.call(()),
                }
            }
        }
    }
}
