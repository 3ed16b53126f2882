//! Shared UI crate for the Beacon landing page. State, translations and all
//! components live here; the platform crates only launch [`LandingApp`].

pub mod core;
pub mod i18n;
pub mod provider;
pub mod views;

pub mod components {
    // Brand, nav, search and the language/theme pickers.
    mod header;
    pub use header::SiteHeader;

    // Hero copy and the waitlist form.
    mod hero;
    pub use hero::Hero;

    // Notification queue + container.
    pub mod toasts;
    pub use toasts::{use_toast_queue, ToastContainer, ToastQueue};
}

mod app;
pub use app::LandingApp;
