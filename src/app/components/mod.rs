//! Shared UI components for the Dioxus fullstack web UI.

pub mod layout;
pub mod status;
pub mod toggle;

pub use layout::Layout;
pub use status::ThemeStatus;
pub use toggle::ThemeToggle;
