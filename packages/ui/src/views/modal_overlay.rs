use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`; clicks inside the card stay
/// inside.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default)] onkeydown: EventHandler<KeyboardEvent>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt| onkeydown.call(evt),
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
