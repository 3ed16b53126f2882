//! Internationalization (i18n) support for `beacon-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading + fallback negotiation)
//! - `fluent` (message formatting, bundle-level key checks)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/beacon-ui.ftl   (fallback/reference)
//!   ru/beacon-ui.ftl
//! ```
//!
//! Unlike a single global loader, the catalog keeps one loader per
//! [`Locale`], so a render is a pure function of the locale it is given:
//! ```ignore
//! use ui::core::locale::Locale;
//! use ui::t;
//! let label = t!(Locale::Ru, "nav-careers");
//! ```
//!
//! Missing keys are caught three times: `fl!` fails the build when a key is
//! absent from the fallback file, [`validate`] checks every embedded locale
//! against [`REQUIRED_KEYS`] at startup, and the tests in `tests/` compare the
//! `.ftl` sources with each other and with the `t!` call sites.
//!
//! To add a new locale:
//! 1. Add a variant to [`Locale`].
//! 2. Copy `en/beacon-ui.ftl` to `i18n/<tag>/beacon-ui.ftl` and translate each value.
//! 3. Run tests to ensure completeness.
use std::sync::Once;

use dioxus::logger::tracing::{debug, error, warn};
use fluent::{FluentBundle, FluentResource};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;

use crate::core::locale::Locale;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Localized lookup for a given locale.
/// Examples:
///     t!(locale, "nav-creators")
///     t!(Locale::Ru, "hero-join-list")
///
/// Expands to `fl!(i18n::loader(locale), ...)`, so keys are checked against
/// the fallback file at compile time.
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key)
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the FTL filename in every locale folder).
const DOMAIN: &str = "beacon-ui";

/// Every message the page renders. Each embedded locale must define all of them.
pub const REQUIRED_KEYS: &[&str] = &[
    "logo",
    "nav-assets",
    "nav-creators",
    "nav-careers",
    "nav-go-pro",
    "search-placeholder",
    "search-icon-alt",
    "language-label",
    "theme-label",
    "theme-light",
    "theme-dark",
    "hero-security-solution",
    "hero-keep-track",
    "hero-pin-alt",
    "hero-noticed",
    "hero-join-waitlist",
    "hero-notify",
    "hero-email-placeholder",
    "hero-join-list",
    "hero-phone-alt",
    "toast-theme-dark",
    "toast-theme-light",
    "toast-dismiss",
    "waitlist-joined",
    "waitlist-invalid",
];

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no embedded translation file for locale `{0}`")]
    MissingLocale(Locale),
    #[error("translation file for `{locale}` is invalid ({errors} error(s))")]
    Invalid { locale: Locale, errors: usize },
    #[error("locale `{locale}` is missing {} key(s): {}", .missing.len(), .missing.join(", "))]
    MissingKeys {
        locale: Locale,
        missing: Vec<&'static str>,
    },
    #[error(transparent)]
    Load(#[from] i18n_embed::I18nEmbedError),
}

/// One loader per supported locale, indexed by `Locale::index`.
struct Catalog {
    loaders: Vec<FluentLanguageLoader>,
}

impl Catalog {
    fn load() -> Self {
        let loaders = Locale::ALL
            .into_iter()
            .map(|locale| {
                let loader = new_loader();
                if let Err(err) = select(&loader, locale) {
                    error!("[i18n] Failed loading `{locale}` ({err}); continuing with fallback");
                }
                loader
            })
            .collect();
        Self { loaders }
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::load);

static INIT: Once = Once::new();

fn new_loader() -> FluentLanguageLoader {
    FluentLanguageLoader::new(DOMAIN, Locale::default().language_id())
}

fn select(loader: &FluentLanguageLoader, locale: Locale) -> Result<(), CatalogError> {
    i18n_embed::select(loader, &Localizations, &[locale.language_id()])?;
    Ok(())
}

/// Loader for `locale`, consumed by the `t!` macro.
pub fn loader(locale: Locale) -> &'static FluentLanguageLoader {
    &CATALOG.loaders[locale.index()]
}

/// Load and validate the catalog (idempotent). Problems are logged, not fatal:
/// the loaders fall back to `en` for anything a locale lacks.
pub fn init() {
    INIT.call_once(|| {
        Lazy::force(&CATALOG);
        match validate() {
            Ok(()) => debug!("[i18n] catalog ready: {:?}", available_locales()),
            Err(err) => error!("[i18n] {err}"),
        }
    });
}

/// Check that every supported locale is embedded and defines every required key.
pub fn validate() -> Result<(), CatalogError> {
    Locale::ALL.into_iter().try_for_each(validate_locale)
}

fn validate_locale(locale: Locale) -> Result<(), CatalogError> {
    let path = format!("{}/{DOMAIN}.ftl", locale.tag());
    let file = Localizations::get(&path).ok_or(CatalogError::MissingLocale(locale))?;
    let source = String::from_utf8_lossy(&file.data).into_owned();

    let resource = FluentResource::try_new(source).map_err(|(_, errors)| CatalogError::Invalid {
        locale,
        errors: errors.len(),
    })?;
    let mut bundle = FluentBundle::new(vec![locale.language_id()]);
    bundle
        .add_resource(resource)
        .map_err(|errors| CatalogError::Invalid {
            locale,
            errors: errors.len(),
        })?;

    let missing: Vec<&'static str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !bundle.has_message(key))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::MissingKeys { locale, missing })
    }
}

/// Locales that actually have an embedded translation file.
pub fn available_locales() -> Vec<Locale> {
    let mut locales = Localizations::iter()
        .filter_map(|path| {
            let tag = path.split('/').next()?;
            match tag.parse::<Locale>() {
                Ok(locale) => Some(locale),
                Err(err) => {
                    warn!("[i18n] ignoring embedded folder: {err}");
                    None
                }
            }
        })
        .collect::<Vec<_>>();
    locales.sort();
    locales.dedup();
    locales
}
