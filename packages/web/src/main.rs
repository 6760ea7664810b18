use dioxus::prelude::*;

use store::Theme;
use views::{CoverLetter, Portfolio};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Portfolio {},
    #[route("/cover-letter")]
    CoverLetter {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!("Starting portfolio for {}", content::portfolio::PROFILE.name));

    let mut theme: ui::ThemeSignal = use_context_provider(|| Signal::new(Theme::default()));
    use_effect(move || {
        ui::load_theme_from_storage(&mut theme);
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: ui::COMPONENTS_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::components::ToastProvider {
            Router::<Route> {}
        }
    }
}
