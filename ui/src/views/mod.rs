mod landing;
pub use landing::{select_locale, select_theme, LandingPage, LandingText, Palette};
