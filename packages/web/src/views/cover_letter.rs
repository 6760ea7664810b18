use dioxus::prelude::*;

use ui::views::CoverLetterView;

#[component]
pub fn CoverLetter() -> Element {
    rsx! {
        document::Title { "Cover Letter Template" }
        CoverLetterView {}
    }
}
