use content::portfolio::POSTS;
use content::{BlogPost, Section};
use dioxus::prelude::*;

use super::SectionHeading;

#[component]
pub fn Blog() -> Element {
    rsx! {
        section {
            id: Section::Blog.id(),
            class: "page-section",
            div {
                class: "section-inner",
                SectionHeading { title: "Blog" }
                div {
                    class: "card-grid",
                    for post in POSTS {
                        PostCard { key: "{post.title}", post: *post }
                    }
                }
            }
        }
    }
}

#[component]
fn PostCard(post: BlogPost) -> Element {
    rsx! {
        article {
            class: "content-card",
            div { class: "content-card-media content-card-media--short" }
            h3 { class: "content-card-title", "{post.title}" }
            p { class: "content-card-text", "{post.excerpt}" }
            div {
                class: "post-meta",
                span { "{post.date}" }
                span { "{post.read_time}" }
            }
        }
    }
}
