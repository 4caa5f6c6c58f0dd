pub mod preferences;

pub use preferences::{Preferences, PreferencesStore};
