use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: "{html_for}", {children} }
    }
}

/// Single-line text input.
#[component]
pub fn Input(
    id: String,
    value: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "text",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    value: String,
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] readonly: bool,
    #[props(default = 8)] rows: u32,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "textarea {class}",
            readonly: readonly,
            rows: "{rows}",
            value: "{value}",
        }
    }
}
