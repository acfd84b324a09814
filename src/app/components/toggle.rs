//! Light/dark toggle button.

use dioxus::prelude::*;

use crate::app::theme::use_theme;

/// Button that flips the theme. Its text is the glyph for the active theme.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let id = theme.config().toggle_id.clone();
    let glyph = theme.glyph();
    let label = if theme.theme().is_dark() {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    };

    rsx! {
        button {
            id: "{id}",
            class: "theme-toggle",
            r#type: "button",
            title: "Toggle theme",
            "aria-label": "{label}",
            onclick: move |_| theme.toggle(),
            "{glyph}"
        }
    }
}
