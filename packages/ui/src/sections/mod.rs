//! The blocks of the portfolio page, top to bottom.

mod hero;
pub use hero::Hero;

mod about;
pub use about::About;

mod projects;
pub use projects::Projects;

mod blog;
pub use blog::Blog;

mod contact;
pub use contact::Contact;

mod footer;
pub use footer::Footer;

use dioxus::prelude::*;

/// Centered section title with the gradient underline.
#[component]
fn SectionHeading(title: String) -> Element {
    rsx! {
        div {
            class: "section-heading",
            h2 { "{title}" }
            div { class: "section-rule" }
        }
    }
}
