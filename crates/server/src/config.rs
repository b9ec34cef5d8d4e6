use shared_types::{AppConfig, FeatureFlags, TrackerSettings};
use std::sync::OnceLock;

use crate::compliance::holidays::NyCourtCalendar;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();
static CALENDAR: OnceLock<NyCourtCalendar> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

fn read_config(path: &str) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse {path}: {e}; using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::info!("{path} not found ({e}); using defaults");
            AppConfig::default()
        }
    }
}

/// Read `config.toml` into the global `OnceLock`. Only the first call has
/// any effect. A missing or unparseable file yields the defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = read_config(CONFIG_PATH);
        config.speedy_trial = config.speedy_trial.sanitized();
        tracing::info!(
            features = ?config.features,
            closures = config.closures.len(),
            "configuration loaded"
        );
        config
    })
}

/// The loaded configuration, or defaults if `load_config()` has not run.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &app_config().features
}

pub fn tracker_settings() -> &'static TrackerSettings {
    &app_config().speedy_trial
}

/// Court holiday table including configured closures.
pub fn court_calendar() -> &'static NyCourtCalendar {
    CALENDAR.get_or_init(|| NyCourtCalendar::with_closures(app_config().closures.clone()))
}
