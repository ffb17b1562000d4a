use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] autocomplete: String,
    #[props(default)] disabled: bool,
    value: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    let kind = r#type;
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{kind}",
            placeholder: "{placeholder}",
            autocomplete: "{autocomplete}",
            disabled: disabled,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
