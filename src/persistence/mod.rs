pub mod files;
pub mod prefs;

pub use files::{atomic_write, ensure_slate_dir, get_slate_dir, prefs_file};
pub use prefs::{load_prefs, load_theme, save_prefs, save_theme, Prefs, PrefsError};
