//! Theme toggle behavior tests
//!
//! Drives the controller against in-memory host bindings:
//! 1. Startup resolution (stored preference vs. system preference)
//! 2. Toggle transitions and persistence
//! 3. Involution: two toggles restore every piece of state

use theme_toggle::host::{
    FixedAppearance, MemoryStore, MemorySurface, PreferenceStore, ThemeSurface,
};
use theme_toggle::{Theme, ThemeConfig, ThemeError, ThemePreferenceController};

const KEY: &str = "theme";
const SUN: &str = "☀️";
const MOON: &str = "🌙";

type Controller = ThemePreferenceController<MemoryStore, FixedAppearance, MemorySurface>;

fn controller(store: MemoryStore, appearance: FixedAppearance) -> Controller {
    ThemePreferenceController::new(
        store,
        appearance,
        MemorySurface::with_glyph(MOON),
        ThemeConfig::default(),
    )
}

fn snapshot(c: &Controller) -> (Option<String>, Option<String>, Option<String>) {
    (
        c.surface().root().map(str::to_string),
        c.surface().glyph().map(str::to_string),
        c.store().entry(KEY).map(str::to_string),
    )
}

// =============================================================================
// Startup resolution
// =============================================================================

/// Scenario A: persisted "dark" -> root attribute present, sun glyph.
#[test]
fn stored_dark_starts_dark() {
    let mut c = controller(MemoryStore::with_entry(KEY, "dark"), FixedAppearance::light());

    let theme = c.resolve_startup().expect("startup should succeed");

    assert_eq!(theme, Theme::Dark);
    assert_eq!(c.surface().root(), Some("dark"));
    assert_eq!(c.surface().glyph(), Some(SUN));
}

/// Scenario B: nothing persisted, system prefers dark.
#[test]
fn system_dark_starts_dark_without_stored_value() {
    let mut c = controller(MemoryStore::new(), FixedAppearance::dark());

    let theme = c.resolve_startup().expect("startup should succeed");

    assert_eq!(theme, Theme::Dark);
    assert_eq!(c.surface().root(), Some("dark"));
    assert_eq!(c.surface().glyph(), Some(SUN));
}

/// Scenario C: nothing persisted, system prefers light.
#[test]
fn system_light_leaves_root_unattributed() {
    let mut c = controller(MemoryStore::new(), FixedAppearance::light());

    let theme = c.resolve_startup().expect("startup should succeed");

    assert_eq!(theme, Theme::Light);
    assert_eq!(c.surface().root(), None);
    // Glyph keeps its markup default
    assert_eq!(c.surface().glyph(), Some(MOON));
}

#[test]
fn light_startup_does_not_touch_glyph() {
    let mut c = ThemePreferenceController::new(
        MemoryStore::new(),
        FixedAppearance::light(),
        MemorySurface::new(),
        ThemeConfig::default(),
    );

    c.resolve_startup().expect("startup should succeed");

    assert_eq!(c.surface().glyph(), None);
}

#[test]
fn stored_light_overrides_system_dark() {
    let mut c = controller(MemoryStore::with_entry(KEY, "light"), FixedAppearance::dark());

    assert_eq!(c.resolve_startup().unwrap(), Theme::Light);
    assert_eq!(c.surface().root(), None);
}

#[test]
fn unrecognized_stored_value_is_light_even_when_system_dark() {
    let mut c = controller(MemoryStore::with_entry(KEY, "oled"), FixedAppearance::dark());

    assert_eq!(c.resolve_startup().unwrap(), Theme::Light);
    assert_eq!(c.surface().root(), None);
}

#[test]
fn empty_stored_value_defers_to_system() {
    let mut c = controller(MemoryStore::with_entry(KEY, ""), FixedAppearance::dark());

    assert_eq!(c.resolve_startup().unwrap(), Theme::Dark);
    assert_eq!(c.surface().root(), Some("dark"));
}

#[test]
fn startup_never_writes_storage() {
    for (store, appearance) in [
        (MemoryStore::with_entry(KEY, "dark"), FixedAppearance::light()),
        (MemoryStore::new(), FixedAppearance::dark()),
        (MemoryStore::new(), FixedAppearance::light()),
    ] {
        let mut c = controller(store, appearance);
        c.resolve_startup().unwrap();
        assert_eq!(c.store().write_count(), 0);
    }
}

#[test]
fn custom_storage_key_is_honored() {
    let config = ThemeConfig::default().with_storage_key("site-theme");
    let mut c = ThemePreferenceController::new(
        MemoryStore::with_entry("site-theme", "dark"),
        FixedAppearance::light(),
        MemorySurface::new(),
        config,
    );

    assert_eq!(c.config().storage_key, "site-theme");
    assert_eq!(c.resolve_startup().unwrap(), Theme::Dark);

    c.toggle().unwrap();
    assert_eq!(c.store().entry("site-theme"), Some("light"));
    assert_eq!(c.store().entry(KEY), None);
}

// =============================================================================
// Toggle
// =============================================================================

/// Scenario D: light -> dark -> light, with persistence.
#[test]
fn toggle_from_light_goes_dark_then_back() {
    let mut c = controller(MemoryStore::new(), FixedAppearance::light());
    c.resolve_startup().unwrap();

    assert_eq!(c.toggle().unwrap(), Theme::Dark);
    assert_eq!(c.surface().root(), Some("dark"));
    assert_eq!(c.surface().glyph(), Some(SUN));
    assert_eq!(c.store().entry(KEY), Some("dark"));

    assert_eq!(c.toggle().unwrap(), Theme::Light);
    assert_eq!(c.surface().root(), None);
    assert_eq!(c.surface().glyph(), Some(MOON));
    assert_eq!(c.store().entry(KEY), Some("light"));
}

#[test]
fn toggle_reads_root_attribute_not_storage() {
    // Storage says dark but the root was never rendered: toggle goes dark
    let mut c = controller(MemoryStore::with_entry(KEY, "dark"), FixedAppearance::light());

    assert_eq!(c.current(), Theme::Light);
    assert_eq!(c.toggle().unwrap(), Theme::Dark);
    assert_eq!(c.store().entry(KEY), Some("dark"));
}

#[test]
fn double_toggle_restores_every_prior_state() {
    let starts = [
        (MemoryStore::new(), FixedAppearance::light()),
        (MemoryStore::new(), FixedAppearance::dark()),
        (MemoryStore::with_entry(KEY, "dark"), FixedAppearance::light()),
        (MemoryStore::with_entry(KEY, "light"), FixedAppearance::dark()),
    ];

    for (store, appearance) in starts {
        let mut c = controller(store, appearance);
        c.resolve_startup().unwrap();
        // Settle into a fully-written state first; before any toggle the
        // store may legitimately be empty.
        c.toggle().unwrap();
        let before = snapshot(&c);

        c.toggle().unwrap();
        c.toggle().unwrap();

        assert_eq!(snapshot(&c), before);
    }
}

#[test]
fn state_agrees_after_every_toggle() {
    let mut c = controller(MemoryStore::new(), FixedAppearance::dark());
    c.resolve_startup().unwrap();

    for _ in 0..5 {
        let theme = c.toggle().unwrap();
        assert_eq!(c.current(), theme);
        assert_eq!(c.surface().root(), theme.root_value());
        assert_eq!(c.surface().glyph(), Some(theme.glyph()));
        assert_eq!(c.store().entry(KEY), Some(theme.as_str()));
    }
}

#[test]
fn apply_theme_writes_all_three() {
    let mut c = controller(MemoryStore::new(), FixedAppearance::light());

    c.apply_theme(Theme::Dark).unwrap();

    assert_eq!(
        snapshot(&c),
        (
            Some("dark".to_string()),
            Some(SUN.to_string()),
            Some("dark".to_string())
        )
    );
}

// =============================================================================
// Host failures
// =============================================================================

/// Store that reads fine but refuses writes (e.g. quota exceeded)
struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Storage("quota exceeded".to_string()))
    }
}

#[test]
fn storage_failure_surfaces_after_dom_update() {
    let mut c = ThemePreferenceController::new(
        ReadOnlyStore,
        FixedAppearance::light(),
        MemorySurface::with_glyph(MOON),
        ThemeConfig::default(),
    );

    let err = c.toggle().expect_err("write should fail");

    assert!(matches!(err, ThemeError::Storage(_)));
    assert_eq!(c.surface().root(), Some("dark"));
    assert_eq!(c.surface().glyph(), Some(SUN));
}

/// Surface whose toggle control is missing from the document
struct NoToggleSurface {
    root: Option<String>,
}

impl ThemeSurface for NoToggleSurface {
    fn root_value(&self) -> Option<String> {
        self.root.clone()
    }

    fn set_root_value(&mut self, value: Option<&str>) -> Result<(), ThemeError> {
        self.root = value.map(str::to_string);
        Ok(())
    }

    fn set_glyph(&mut self, _glyph: &str) -> Result<(), ThemeError> {
        Err(ThemeError::MissingElement("theme-toggle".to_string()))
    }
}

#[test]
fn missing_toggle_control_is_reported_and_nothing_persisted() {
    let mut c = ThemePreferenceController::new(
        MemoryStore::new(),
        FixedAppearance::light(),
        NoToggleSurface { root: None },
        ThemeConfig::default(),
    );

    let err = c.toggle().expect_err("glyph write should fail");

    assert!(matches!(err, ThemeError::MissingElement(_)));
    let (store, _, _) = c.into_parts();
    assert_eq!(store.write_count(), 0);
}
