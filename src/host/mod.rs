//! Host bindings the theme controller runs against (browser, in-memory)

pub mod memory;
pub mod traits;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use memory::{FixedAppearance, MemoryStore, MemorySurface};
pub use traits::{PreferenceStore, SystemAppearance, ThemeSurface};
