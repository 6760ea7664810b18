use content::portfolio::PROFILE;
use content::Section;
use dioxus::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};

#[component]
pub fn Hero(on_navigate: EventHandler<Section>) -> Element {
    rsx! {
        section {
            id: "hero",
            class: "hero",
            div {
                class: "hero-inner fade-in",
                h1 { class: "hero-name", "{PROFILE.name}" }
                p { class: "hero-role", "{PROFILE.role}" }
                p { class: "hero-tagline", "{PROFILE.tagline}" }
                div {
                    class: "hero-actions",
                    Button {
                        size: ButtonSize::Large,
                        onclick: move |_| on_navigate.call(Section::Projects),
                        "View My Work"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Large,
                        onclick: move |_| on_navigate.call(Section::Contact),
                        "Get In Touch"
                    }
                }
            }
        }
    }
}
