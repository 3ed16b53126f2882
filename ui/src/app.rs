//! Composition root shared by the web and desktop entry points.

use dioxus::prelude::*;

use crate::components::use_toast_queue;
use crate::i18n;
use crate::provider::use_theme_handle;
use crate::views::LandingPage;

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Builds the theme and toast state once and hands both to the page explicitly.
#[component]
pub fn LandingApp() -> Element {
    i18n::init();

    let theme = use_theme_handle();
    let toasts = use_toast_queue();

    rsx! {
        document::Title { "Beacon" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        // Packaged native builds cannot rely on the asset server; inline the theme.
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{MAIN_CSS_INLINE}" }
        }

        LandingPage { theme, toasts }
    }
}
