//! Theme preference controller.
//!
//! Decides the active theme at startup and toggles it on user interaction.
//! The persisted value, the root attribute and the toggle glyph are only
//! ever written together, by [`ThemePreferenceController::apply_theme`].

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::host::{PreferenceStore, SystemAppearance, ThemeSurface};
use crate::theme::Theme;

/// Where the startup theme came from (for logging)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    System,
    Default,
}

pub struct ThemePreferenceController<S, A, U> {
    store: S,
    appearance: A,
    surface: U,
    config: ThemeConfig,
}

impl<S, A, U> ThemePreferenceController<S, A, U>
where
    S: PreferenceStore,
    A: SystemAppearance,
    U: ThemeSurface,
{
    pub fn new(store: S, appearance: A, surface: U, config: ThemeConfig) -> Self {
        Self {
            store,
            appearance,
            surface,
            config,
        }
    }

    /// Decide the initial theme from the stored preference and the system query.
    ///
    /// Dark is rendered onto the surface; light leaves the surface untouched.
    /// Never writes storage.
    pub fn resolve_startup(&mut self) -> Result<Theme, ThemeError> {
        let stored = self.store.get(&self.config.storage_key)?;
        let (theme, source) = resolve(stored.as_deref(), || self.appearance.prefers_dark());

        tracing::debug!("Startup theme: {} (source: {:?})", theme, source);

        if theme.is_dark() {
            self.render(theme)?;
        }
        Ok(theme)
    }

    /// Flip between light and dark and persist the new choice.
    pub fn toggle(&mut self) -> Result<Theme, ThemeError> {
        let next = self.current().toggled();
        tracing::debug!("Toggling theme to {}", next);
        self.apply_theme(next)?;
        Ok(next)
    }

    /// Write root attribute, glyph and persisted value for `theme`.
    ///
    /// A storage failure is returned after the surface has been updated.
    pub fn apply_theme(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.render(theme)?;
        self.store.set(&self.config.storage_key, theme.as_str())
    }

    /// Active theme, read from the root attribute
    pub fn current(&self) -> Theme {
        Theme::from_root(self.surface.root_value().as_deref())
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn into_parts(self) -> (S, A, U) {
        (self.store, self.appearance, self.surface)
    }

    fn render(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.surface.set_root_value(theme.root_value())?;
        self.surface.set_glyph(theme.glyph())
    }
}

/// Stored `"dark"` wins; an empty or missing value defers to the system query.
fn resolve(stored: Option<&str>, prefers_dark: impl FnOnce() -> bool) -> (Theme, ThemeSource) {
    match stored {
        Some(value) if !value.is_empty() => (Theme::parse(value), ThemeSource::Stored),
        _ if prefers_dark() => (Theme::Dark, ThemeSource::System),
        _ => (Theme::Light, ThemeSource::Default),
    }
}
