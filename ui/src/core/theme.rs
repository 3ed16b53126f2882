//! Light/dark theme state and the rules for switching between them.
//!
//! The theme lives in exactly one place (a [`ThemeStore`]). Changing it goes
//! through [`switch_theme`], which also pushes the new value onto a
//! [`ThemeSurface`] (the document root in the app) and raises one notice.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::locale::Locale;
use crate::core::notice::{Notice, Notifier};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}` (expected `light` or `dark`)")]
pub struct ParseThemeError(pub String);

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Value written to the `data-theme` attribute and used as the option value.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Owner of the active theme.
pub trait ThemeStore {
    fn theme(&self) -> Theme;
    fn set_theme(&mut self, theme: Theme);
}

/// A plain value is its own store (headless use and tests).
impl ThemeStore for Theme {
    fn theme(&self) -> Theme {
        *self
    }

    fn set_theme(&mut self, theme: Theme) {
        *self = theme;
    }
}

/// Whatever stylesheet rules key off; in the app this is the root `data-theme` attribute.
pub trait ThemeSurface {
    fn apply(&mut self, theme: Theme);
}

/// Switch to `next`, apply it, and announce it in `locale`.
///
/// Re-selecting the active theme is a no-op: nothing is applied and no notice
/// is raised. Returns whether the theme changed.
pub fn switch_theme<S, U, N>(
    store: &mut S,
    surface: &mut U,
    notifier: &mut N,
    locale: Locale,
    next: Theme,
) -> bool
where
    S: ThemeStore + ?Sized,
    U: ThemeSurface + ?Sized,
    N: Notifier + ?Sized,
{
    if store.theme() == next {
        return false;
    }
    store.set_theme(next);
    surface.apply(next);
    notifier.notify(Notice::theme_enabled(next, locale));
    true
}
