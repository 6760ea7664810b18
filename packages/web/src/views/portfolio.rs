use dioxus::prelude::*;

use ui::views::PortfolioView;

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        PortfolioView {}
    }
}
