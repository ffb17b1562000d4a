//! A button driven by a [`RequestGate`].

use dioxus::prelude::*;
use flow::{GateLabels, GatePhase, RequestGate};

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaCheck, FaSpinner};
use crate::Icon;

/// Shows the gate's label for its phase, a spinner while busy and a check after
/// success. Disabled whenever the gate is not `Ready`, or when `disabled` is set.
#[component]
pub fn GateButton(
    gate: RequestGate,
    labels: GateLabels,
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
) -> Element {
    let label = gate.label(&labels);
    let blocked = disabled || !gate.is_ready();
    let phase = gate.phase();
    let kind = r#type;

    rsx! {
        Button {
            variant,
            r#type: kind,
            disabled: blocked,
            class: "gate-button",
            onclick: move |evt| onclick.call(evt),
            match phase {
                GatePhase::Busy => rsx! {
                    span { class: "gate-icon spin",
                        Icon { icon: FaSpinner, width: 14, height: 14 }
                    }
                },
                GatePhase::Succeeded => rsx! {
                    span { class: "gate-icon",
                        Icon { icon: FaCheck, width: 14, height: 14 }
                    }
                },
                GatePhase::Ready => rsx! {},
            }
            "{label}"
        }
    }
}
