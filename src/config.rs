use crate::core::history::DEFAULT_HISTORY_CAPACITY;
use crate::i18n::{Language, Theme};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub assistant_name: String,
    pub language: Language,
    pub theme: Theme,
    pub window_width: f32,
    pub window_height: f32,
    pub thinking_min: Duration,
    pub thinking_max: Duration,
    pub history_capacity: usize,
    pub welcome_delay: Duration,
    pub cjk_font_path: Option<PathBuf>,
    pub preferences_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

impl Config {
    /// Builds the configuration from a key lookup; missing or invalid values
    /// fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let language = parse_or(lookup("NEXUTHA_LANGUAGE"), Language::Ja);
        let theme = parse_or(lookup("NEXUTHA_THEME"), Theme::Dark);

        let window_width = parse_or(lookup("NEXUTHA_WINDOW_WIDTH"), 420.0_f32).max(280.0);
        let window_height = parse_or(lookup("NEXUTHA_WINDOW_HEIGHT"), 640.0_f32).max(360.0);

        let min_ms = parse_or(lookup("NEXUTHA_THINKING_MIN_MS"), 1500_u64);
        let max_ms = parse_or(lookup("NEXUTHA_THINKING_MAX_MS"), 3500_u64);
        let (min_ms, max_ms) = (min_ms.min(max_ms), min_ms.max(max_ms));

        let history_capacity = parse_or(lookup("NEXUTHA_HISTORY_CAPACITY"), DEFAULT_HISTORY_CAPACITY).max(1);
        let welcome_delay_ms = parse_or(lookup("NEXUTHA_WELCOME_DELAY_MS"), 1000_u64);

        let cjk_font_path = lookup("NEXUTHA_CJK_FONT")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let preferences_path = lookup("NEXUTHA_PREFERENCES")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            assistant_name: "NEXUTHA AI".to_string(),
            language,
            theme,
            window_width,
            window_height,
            thinking_min: Duration::from_millis(min_ms),
            thinking_max: Duration::from_millis(max_ms),
            history_capacity,
            welcome_delay: Duration::from_millis(welcome_delay_ms),
            cjk_font_path,
            preferences_path,
        }
    }
}
