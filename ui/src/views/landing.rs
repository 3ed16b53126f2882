//! The landing page: header + hero + toasts, rendered from `(locale, theme)`.

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::components::{Hero, SiteHeader, ToastContainer, ToastQueue};
use crate::core::locale::Locale;
use crate::core::notice::Notifier;
use crate::core::theme::{switch_theme, Theme, ThemeStore, ThemeSurface};
use crate::provider::{DocumentRoot, ThemeHandle};
use crate::t;

/// Every display string on the page, resolved for one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingText {
    pub logo: String,
    pub assets: String,
    pub creators: String,
    pub careers: String,
    pub go_pro: String,
    pub search_placeholder: String,
    pub search_icon_alt: String,
    pub language_label: String,
    pub theme_label: String,
    pub theme_light: String,
    pub theme_dark: String,
    pub security_solution: String,
    pub keep_track: String,
    pub pin_alt: String,
    pub noticed: String,
    pub join_waitlist: String,
    pub notify: String,
    pub email_placeholder: String,
    pub join_list: String,
    pub phone_alt: String,
}

impl LandingText {
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            logo: t!(locale, "logo"),
            assets: t!(locale, "nav-assets"),
            creators: t!(locale, "nav-creators"),
            careers: t!(locale, "nav-careers"),
            go_pro: t!(locale, "nav-go-pro"),
            search_placeholder: t!(locale, "search-placeholder"),
            search_icon_alt: t!(locale, "search-icon-alt"),
            language_label: t!(locale, "language-label"),
            theme_label: t!(locale, "theme-label"),
            theme_light: t!(locale, "theme-light"),
            theme_dark: t!(locale, "theme-dark"),
            security_solution: t!(locale, "hero-security-solution"),
            keep_track: t!(locale, "hero-keep-track"),
            pin_alt: t!(locale, "hero-pin-alt"),
            noticed: t!(locale, "hero-noticed"),
            join_waitlist: t!(locale, "hero-join-waitlist"),
            notify: t!(locale, "hero-notify"),
            email_placeholder: t!(locale, "hero-email-placeholder"),
            join_list: t!(locale, "hero-join-list"),
            phone_alt: t!(locale, "hero-phone-alt"),
        }
    }

    pub fn theme_name(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.theme_light,
            Theme::Dark => &self.theme_dark,
        }
    }
}

/// Theme-dependent class names for each styled region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub header: &'static str,
    pub language_select: &'static str,
    pub theme_select: &'static str,
    pub hero: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                page: "landing",
                header: "site-header site-header--light",
                language_select: "picker picker--focus-ring",
                theme_select: "picker",
                hero: "hero hero--light",
            },
            Theme::Dark => Self {
                page: "landing landing--dark",
                header: "site-header site-header--dark",
                language_select: "picker picker--dark",
                theme_select: "picker picker--dark",
                hero: "hero hero--dark",
            },
        }
    }
}

/// Language picker handler: parse the option value and make it current.
///
/// Unknown values are logged and leave `current` untouched. Returns whether
/// the locale changed.
pub fn select_locale(current: &mut Locale, tag: &str) -> bool {
    match tag.parse::<Locale>() {
        Ok(next) if next == *current => false,
        Ok(next) => {
            *current = next;
            true
        }
        Err(err) => {
            warn!("[landing] {err}");
            false
        }
    }
}

/// Theme picker handler: parse the option value and hand it to [`switch_theme`].
pub fn select_theme<S, U, N>(
    store: &mut S,
    surface: &mut U,
    notifier: &mut N,
    locale: Locale,
    tag: &str,
) -> bool
where
    S: ThemeStore + ?Sized,
    U: ThemeSurface + ?Sized,
    N: Notifier + ?Sized,
{
    match tag.parse::<Theme>() {
        Ok(next) => switch_theme(store, surface, notifier, locale, next),
        Err(err) => {
            warn!("[landing] {err}");
            false
        }
    }
}

#[component]
pub fn LandingPage(theme: ThemeHandle, toasts: ToastQueue) -> Element {
    let mut locale = use_signal(Locale::default);

    let current_locale = locale();
    let current_theme = theme.current();
    let text = LandingText::for_locale(current_locale);
    let palette = Palette::for_theme(current_theme);

    debug!("[landing] render locale={current_locale} theme={current_theme}");

    let on_locale_change = move |tag: String| {
        let mut next = *locale.peek();
        if select_locale(&mut next, &tag) {
            locale.set(next);
        }
    };

    let on_theme_change = move |tag: String| {
        let mut store = theme;
        let mut notifier = toasts;
        select_theme(&mut store, &mut DocumentRoot, &mut notifier, *locale.peek(), &tag);
    };

    rsx! {
        div { class: palette.page, "data-theme": current_theme.as_str(),
            SiteHeader {
                text: text.clone(),
                palette,
                locale: current_locale,
                theme: current_theme,
                on_locale_change,
                on_theme_change,
            }
            Hero {
                text,
                palette,
                locale: current_locale,
                toasts,
            }
            ToastContainer { queue: toasts, locale: current_locale }
        }
    }
}
