//! Persistence boundary: a small key-value store that survives restarts, and
//! the theme preference that lives in it.

mod store;
mod theme;

pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceStore};
pub use theme::{ThemeHandle, ThemePreference, THEME_KEY};
