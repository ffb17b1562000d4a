//! The confirmation modal. Renders whichever [`ModalMode`] the flow holds.

use dioxus::prelude::*;
use flow::{Dismissal, ModalMode, ModalTone};

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaCircleQuestion, FaTriangleExclamation};
use crate::views::ModalOverlay;
use crate::Icon;

/// Accept goes to `on_accept`. The reject button, a click on the backdrop and
/// Escape all go to `on_dismiss`, tagged with how the modal was closed.
#[component]
pub fn ConfirmModal(
    mode: ModalMode,
    on_accept: EventHandler<()>,
    on_dismiss: EventHandler<Dismissal>,
) -> Element {
    let title = mode.title();
    let message = mode.message();
    let accept = mode.accept_label();
    let reject = mode.reject_label();
    let tone = mode.tone();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_dismiss.call(Dismissal::Overlay),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_dismiss.call(Dismissal::Escape);
                }
            },
            div { class: "modal-body",
                div { class: "modal-header",
                    match tone {
                        ModalTone::Question => rsx! {
                            span { class: "modal-icon modal-icon-question",
                                Icon { icon: FaCircleQuestion, width: 20, height: 20 }
                            }
                        },
                        ModalTone::Warning => rsx! {
                            span { class: "modal-icon modal-icon-warning",
                                Icon { icon: FaTriangleExclamation, width: 20, height: 20 }
                            }
                        },
                    }
                    h2 { class: "modal-title", "{title}" }
                }
                p { class: "modal-message", "{message}" }
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_dismiss.call(Dismissal::Button),
                        "{reject}"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_accept.call(()),
                        "{accept}"
                    }
                }
            }
        }
    }
}
