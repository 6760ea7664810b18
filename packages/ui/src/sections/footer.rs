use content::portfolio::PROFILE;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "site-footer",
            p { "{PROFILE.footer}" }
        }
    }
}
