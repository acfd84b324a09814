use dioxus::prelude::*;

use crate::app::theme::use_theme;

/// Shows which theme is active.
#[component]
pub fn ThemeStatus() -> Element {
    let theme = use_theme().theme();

    rsx! {
        section { class: "theme-status",
            h1 { "Appearance" }
            p { "Current theme: " strong { "{theme}" } }
            p { class: "text-muted",
                "Your choice is remembered in this browser. Without a saved choice, the system setting decides."
            }
        }
    }
}
