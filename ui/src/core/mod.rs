//! Platform-agnostic state and rules for the landing page.
//!
//! Nothing in here renders; components in `views`/`components` call into
//! these types so the behaviour stays testable without a renderer.

pub mod locale;
pub mod notice;
pub mod theme;
pub mod timing;
pub mod waitlist;
