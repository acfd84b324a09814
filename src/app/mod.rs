//! Dioxus fullstack application entry point.
//!
//! Provides the root App component, rendered on the server and hydrated in
//! the browser.

use dioxus::prelude::*;

pub mod components;
pub mod theme;

use crate::config::ThemeConfig;
use components::{Layout, ThemeStatus};
use theme::use_theme_provider;

/// Root app component
#[component]
pub fn App() -> Element {
    // Initialize theme context at app root (handles localStorage + root attribute)
    use_theme_provider(ThemeConfig::default());

    rsx! {
        Layout { title: "Appearance",
            ThemeStatus {}
        }
    }
}
