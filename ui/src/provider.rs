//! Theme provider: the single reactive owner of the active [`Theme`] and the
//! effect that pushes it onto the document root.
//!
//! The handle is created once by the composition root and handed to the page
//! as a prop. Children never look it up through context.

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::core::theme::{Theme, ThemeStore, ThemeSurface};

/// Copyable handle over the theme signal (read + set).
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeHandle {
    theme: Signal<Theme>,
}

impl ThemeHandle {
    /// Reactive read: components calling this re-render on change.
    pub fn current(&self) -> Theme {
        (self.theme)()
    }
}

impl ThemeStore for ThemeHandle {
    fn theme(&self) -> Theme {
        *self.theme.peek()
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme.set(theme);
    }
}

/// Create the theme state at mount (light) and apply it to the document once.
///
/// Later changes are applied by whoever calls `switch_theme` with a
/// [`DocumentRoot`] surface.
pub fn use_theme_handle() -> ThemeHandle {
    let theme = use_signal(Theme::default);
    use_hook(move || {
        let initial = *theme.peek();
        DocumentRoot.apply(initial);
    });
    ThemeHandle { theme }
}

/// `data-theme` on `<html>`; stylesheet rules key off this attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn apply(&mut self, theme: Theme) {
        debug!("[theme] data-theme={theme}");
        set_root_attribute(theme);
    }
}

#[cfg(target_arch = "wasm32")]
fn set_root_attribute(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
            warn!("[theme] could not set data-theme={theme}: {err:?}");
        }
    } else {
        warn!("[theme] no document element; data-theme={theme} not applied");
    }
}

// Native renderers host the page in a webview; reach its document through eval.
#[cfg(not(target_arch = "wasm32"))]
fn set_root_attribute(theme: Theme) {
    let script = format!(
        "document.documentElement.setAttribute('data-theme', '{}'); return true;",
        theme.as_str()
    );
    let eval = document::eval(&script);
    spawn(async move {
        if let Err(err) = eval.await {
            warn!("[theme] could not set data-theme={theme}: {err}");
        }
    });
}
