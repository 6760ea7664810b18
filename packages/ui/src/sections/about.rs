use content::portfolio::{PROFILE, SKILLS};
use content::Section;
use dioxus::prelude::*;

use super::SectionHeading;

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            id: Section::About.id(),
            class: "page-section",
            div {
                class: "section-inner",
                SectionHeading { title: "About Me" }
                div {
                    class: "about-grid",
                    div {
                        class: "about-text",
                        for paragraph in PROFILE.about {
                            p { "{paragraph}" }
                        }
                        div {
                            class: "chip-list",
                            for skill in SKILLS {
                                span { key: "{skill}", class: "chip", "{skill}" }
                            }
                        }
                    }
                    div { class: "about-art" }
                }
            }
        }
    }
}
