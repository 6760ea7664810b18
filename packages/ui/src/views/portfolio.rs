use content::Section;
use dioxus::prelude::*;

use crate::scroll::{scroll_to_section, use_scroll_spy, ScrollSpy};
use crate::sections::{About, Blog, Contact, Footer, Hero, Projects};
use crate::Navbar;

const PORTFOLIO_CSS: Asset = asset!("/assets/styling/portfolio.css");

/// The single-page portfolio: navbar, sections and footer.
#[component]
pub fn PortfolioView() -> Element {
    let ScrollSpy { scrolled, active } = use_scroll_spy();
    let on_navigate = move |section: Section| scroll_to_section(section);

    rsx! {
        document::Stylesheet { href: PORTFOLIO_CSS }
        div {
            class: "portfolio",
            Navbar {
                active: active(),
                scrolled: scrolled(),
                on_navigate: on_navigate,
            }
            Hero { on_navigate: on_navigate }
            About {}
            Projects {}
            Blog {}
            Contact {}
            Footer {}
        }
    }
}
