//! Theme Toggle
//!
//! Light/dark theme toggle for Dioxus web UIs.
//!
//! This library provides:
//! - A theme preference controller (startup resolution + toggle)
//! - Host bindings for browser localStorage, matchMedia and the document root
//! - In-memory bindings for native builds and tests
//! - Dioxus components: toggle button, layout, theme context

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod theme;

pub use config::ThemeConfig;
pub use controller::{ThemePreferenceController, ThemeSource};
pub use error::ThemeError;
pub use theme::Theme;
