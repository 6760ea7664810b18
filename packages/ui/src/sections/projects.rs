use content::portfolio::PROJECTS;
use content::{Project, Section};
use dioxus::prelude::*;

use super::SectionHeading;
use crate::icons::FaArrowUpRightFromSquare;
use crate::Icon;

#[component]
pub fn Projects() -> Element {
    rsx! {
        section {
            id: Section::Projects.id(),
            class: "page-section page-section--tinted",
            div {
                class: "section-inner",
                SectionHeading { title: "Projects" }
                div {
                    class: "card-grid",
                    for project in PROJECTS {
                        ProjectCard { key: "{project.title}", project: *project }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        div {
            class: "content-card content-card--lift",
            div {
                class: "content-card-media",
                div { class: "content-card-glyph" }
            }
            h3 { class: "content-card-title", "{project.title}" }
            p { class: "content-card-text", "{project.description}" }
            div {
                class: "chip-list chip-list--small",
                for tech in project.tech {
                    span { key: "{tech}", class: "chip chip--small", "{tech}" }
                }
            }
            a {
                class: "btn btn-ghost btn-md content-card-link",
                href: "{project.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "View Project"
                Icon { icon: FaArrowUpRightFromSquare, width: 12, height: 12 }
            }
        }
    }
}
