use dioxus::prelude::*;

use crate::CoverLetterGenerator;

/// Standalone page hosting the cover-letter generator.
#[component]
pub fn CoverLetterView() -> Element {
    rsx! {
        div {
            class: "cover-letter-page",
            div {
                class: "cover-letter-page-inner",
                h1 { class: "cover-letter-page-title", "Cover Letter Template" }
                CoverLetterGenerator {}
            }
        }
    }
}
