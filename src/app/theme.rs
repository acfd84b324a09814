//! Theme state for the Dioxus UI.
//!
//! Wraps [`ThemePreferenceController`] in a context shared by the toggle and
//! any component that wants to know the active theme.

use dioxus::prelude::*;

use crate::config::ThemeConfig;
use crate::controller::ThemePreferenceController;
use crate::error::ThemeError;
use crate::host::ThemeSurface;
use crate::theme::Theme;

#[cfg(target_arch = "wasm32")]
use crate::host::dom;

#[cfg(target_arch = "wasm32")]
type AppStore = dom::LocalStorage;
#[cfg(target_arch = "wasm32")]
type AppAppearance = dom::MediaQueryAppearance;

// SSR has no browser storage or media query; handlers never fire there.
#[cfg(not(target_arch = "wasm32"))]
type AppStore = crate::host::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
type AppAppearance = crate::host::FixedAppearance;

type AppController = ThemePreferenceController<AppStore, AppAppearance, AppSurface>;

#[cfg(target_arch = "wasm32")]
fn open_store() -> Result<AppStore, ThemeError> {
    dom::LocalStorage::open()
}

#[cfg(not(target_arch = "wasm32"))]
fn open_store() -> Result<AppStore, ThemeError> {
    Ok(AppStore::new())
}

#[cfg(target_arch = "wasm32")]
fn system_appearance(config: &ThemeConfig) -> AppAppearance {
    dom::MediaQueryAppearance::new(config.dark_media_query.clone())
}

#[cfg(not(target_arch = "wasm32"))]
fn system_appearance(_config: &ThemeConfig) -> AppAppearance {
    AppAppearance::light()
}

/// Inline script that applies dark mode before first paint.
///
/// Startup resolution otherwise waits for hydration, so a dark page would
/// render light first. Only the root attribute is set here; the glyph is
/// corrected when the client runs [`ThemeContext::resolve_startup`].
pub fn pre_paint_script(config: &ThemeConfig) -> String {
    format!(
        r#"(function(){{
    var t = null;
    try {{ t = localStorage.getItem('{key}'); }} catch (e) {{}}
    var m = window.matchMedia && window.matchMedia('{query}').matches;
    if (t === 'dark' || (!t && m)) document.documentElement.setAttribute('{attribute}', 'dark');
}})();"#,
        key = config.storage_key,
        query = config.dark_media_query,
        attribute = config.attribute,
    )
}

/// Surface backed by Dioxus signals.
///
/// The glyph is a signal rendered as the toggle's text. Root attribute writes
/// go to a mirror signal and, in the browser, to `document.documentElement`,
/// which is authoritative for reads there.
pub struct AppSurface {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    attribute: String,
    root: Signal<Option<String>>,
    glyph: Signal<String>,
}

impl ThemeSurface for AppSurface {
    fn root_value(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            dom::root_attribute(&self.attribute)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            (*self.root.peek()).clone()
        }
    }

    fn set_root_value(&mut self, value: Option<&str>) -> Result<(), ThemeError> {
        #[cfg(target_arch = "wasm32")]
        dom::set_root_attribute(&self.attribute, value)?;

        self.root.set(value.map(str::to_string));
        Ok(())
    }

    fn set_glyph(&mut self, glyph: &str) -> Result<(), ThemeError> {
        self.glyph.set(glyph.to_string());
        Ok(())
    }
}

/// Global theme state shared via context
#[derive(Clone)]
pub struct ThemeContext {
    root: Signal<Option<String>>,
    glyph: Signal<String>,
    config: ThemeConfig,
}

impl ThemeContext {
    /// Active theme (reactive)
    pub fn theme(&self) -> Theme {
        Theme::from_root((self.root)().as_deref())
    }

    /// Toggle glyph (reactive)
    pub fn glyph(&self) -> String {
        (self.glyph)()
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Resolve the initial theme from storage and the system preference.
    pub fn resolve_startup(&self) {
        match self.controller().and_then(|mut c| c.resolve_startup()) {
            Ok(theme) => tracing::debug!("Theme resolved at startup: {}", theme),
            Err(e) => tracing::warn!("Failed to resolve startup theme: {}", e),
        }
    }

    /// Flip light/dark and persist. Failures are logged, not surfaced.
    pub fn toggle(&self) {
        if let Err(e) = self.controller().and_then(|mut c| c.toggle()) {
            tracing::warn!("Failed to toggle theme: {}", e);
        }
    }

    fn controller(&self) -> Result<AppController, ThemeError> {
        let surface = AppSurface {
            attribute: self.config.attribute.clone(),
            root: self.root,
            glyph: self.glyph,
        };
        Ok(ThemePreferenceController::new(
            open_store()?,
            system_appearance(&self.config),
            surface,
            self.config.clone(),
        ))
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider(config: ThemeConfig) -> ThemeContext {
    // Light is the markup default: no root attribute, moon glyph
    let root = use_signal(|| None::<String>);
    let glyph = use_signal(|| Theme::Light.glyph().to_string());

    let ctx = use_context_provider(|| ThemeContext {
        root,
        glyph,
        config,
    });

    // Client-side only: read localStorage / matchMedia and apply
    #[cfg(target_arch = "wasm32")]
    {
        let startup = ctx.clone();
        use_effect(move || startup.resolve_startup());
    }

    ctx
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
