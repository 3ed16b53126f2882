//! Transient notifications ("toasts").
//!
//! [`ToastStack`] is the pure bookkeeping; the component layer wraps it in a
//! signal and takes care of timers and rendering.

use crate::core::locale::Locale;
use crate::core::theme::Theme;
use crate::t;

/// How long a toast stays up before it dismisses itself.
pub const AUTO_CLOSE_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Suggested CSS modifier, e.g. `toast--success`.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "toast--success",
            Severity::Info => "toast--info",
            Severity::Warning => "toast--warning",
            Severity::Error => "toast--error",
        }
    }

    /// ARIA role: problems interrupt, everything else is polite.
    pub fn aria_role(self) -> &'static str {
        match self {
            Severity::Warning | Severity::Error => "alert",
            Severity::Success | Severity::Info => "status",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Announcement raised after a theme switch: success for dark, info for light.
    pub fn theme_enabled(theme: Theme, locale: Locale) -> Self {
        match theme {
            Theme::Dark => Self::new(t!(locale, "toast-theme-dark"), Severity::Success),
            Theme::Light => Self::new(t!(locale, "toast-theme-light"), Severity::Info),
        }
    }
}

/// Sink for notices.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Live toasts in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notice });
        id
    }

    /// Remove a toast. Returns false if it was already gone (timer raced a click).
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
