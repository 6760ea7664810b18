use content::Section;
use dioxus::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::export::open_in_new_tab;
use crate::icons::{FaFileLines, FaMoon, FaSun};
use crate::{toggle_theme, use_theme, Icon, COVER_LETTER_PATH};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Fixed top bar of the portfolio page.
#[component]
pub fn Navbar(
    /// Section currently under the bar, highlighted in the menu.
    active: Option<Section>,
    /// Whether the page has scrolled past the threshold.
    scrolled: bool,
    on_navigate: EventHandler<Section>,
) -> Element {
    let mut theme = use_theme();

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        nav {
            class: if scrolled { "navbar navbar--scrolled" } else { "navbar" },
            div {
                class: "navbar-inner",
                div { class: "navbar-brand", "Portfolio" }

                div {
                    class: "navbar-links",
                    for section in Section::ALL {
                        button {
                            key: "{section.id()}",
                            class: if active == Some(section) { "navbar-link active" } else { "navbar-link" },
                            onclick: move |_| on_navigate.call(section),
                            "{section.label()}"
                        }
                    }
                }

                div {
                    class: "navbar-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        class: "navbar-cover-letter",
                        onclick: move |_| {
                            if let Err(e) = open_in_new_tab(COVER_LETTER_PATH) {
                                tracing::warn!("Failed to open cover letter page: {}", e);
                            }
                        },
                        Icon { icon: FaFileLines, width: 14, height: 14 }
                        span { "Cover Letter Template" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        title: "Toggle theme",
                        onclick: move |_| toggle_theme(&mut theme),
                        if theme().is_dark() {
                            Icon { icon: FaSun, width: 16, height: 16 }
                        } else {
                            Icon { icon: FaMoon, width: 16, height: 16 }
                        }
                    }
                }
            }
        }
    }
}
