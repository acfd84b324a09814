//! Layout component wrapping the page with the header toggle and footer.

use dioxus::prelude::*;

use super::toggle::ThemeToggle;
use crate::app::theme::{pre_paint_script, use_theme};
use crate::config;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = config::version();
    let git_sha = config::git_sha();
    let full_title = format!("{} - Theme Toggle", props.title);
    let theme_script = pre_paint_script(use_theme().config());

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        // CSS variables keyed off [data-theme="dark"]
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/theme.css")
        }

        // Runs before the content below is painted
        script { dangerous_inner_html: "{theme_script}" }

        header { class: "site-header",
            strong { "Theme Toggle" }
            ThemeToggle {}
        }
        main { class: "site-main",
            {props.children}
        }
        footer { class: "site-footer",
            small { "v{version} ({git_sha})" }
        }
    }
}
