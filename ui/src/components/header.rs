use dioxus::prelude::*;

use crate::core::locale::Locale;
use crate::core::theme::Theme;
use crate::views::{LandingText, Palette};

const SEARCH_ICON: Asset = asset!("/assets/icons/search.svg");

/// Brand, navigation, search box and the language/theme pickers.
///
/// Selection changes are reported as raw option values; the page owns the
/// parsing and the state.
#[component]
pub fn SiteHeader(
    text: LandingText,
    palette: Palette,
    locale: Locale,
    theme: Theme,
    on_locale_change: EventHandler<String>,
    on_theme_change: EventHandler<String>,
) -> Element {
    rsx! {
        header { class: palette.header,
            a { class: "site-header__logo", href: "#", "{text.logo}" }

            nav { class: "site-header__nav",
                ul { class: "site-header__links",
                    details { class: "site-header__menu",
                        summary { "{text.assets}" }
                    }
                    li { a { class: "site-header__link", href: "#", "{text.creators}" } }
                    li { a { class: "site-header__link", href: "#", "{text.careers}" } }
                    li { a { class: "site-header__link", href: "#", "{text.go_pro}" } }
                }
            }

            div { class: "search",
                img { class: "search__icon", src: SEARCH_ICON, alt: "{text.search_icon_alt}" }
                input {
                    class: "search__input",
                    r#type: "text",
                    placeholder: "{text.search_placeholder}",
                    aria_label: "{text.search_placeholder}",
                }
            }

            label { class: "visually-hidden", r#for: "locale-select", "{text.language_label}" }
            select {
                id: "locale-select",
                class: palette.language_select,
                value: locale.tag(),
                onchange: move |evt: FormEvent| on_locale_change.call(evt.value()),
                for choice in Locale::ALL {
                    option {
                        key: "{choice.tag()}",
                        value: choice.tag(),
                        selected: choice == locale,
                        "{choice.native_name()}"
                    }
                }
            }

            label { class: "visually-hidden", r#for: "theme-select", "{text.theme_label}" }
            select {
                id: "theme-select",
                class: palette.theme_select,
                value: theme.as_str(),
                onchange: move |evt: FormEvent| on_theme_change.call(evt.value()),
                for choice in Theme::ALL {
                    option {
                        key: "{choice.as_str()}",
                        value: choice.as_str(),
                        selected: choice == theme,
                        "{text.theme_name(choice)}"
                    }
                }
            }
        }
    }
}
