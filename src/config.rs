use crate::models::MissingMeaning;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LIST_FILE: &str = "oxford3000.txt";
pub const DEFAULT_STATE_FILE: &str = "widget_state.json";
pub const DEFAULT_LOG_FILE: &str = "widget_debug.log";
pub const DEFAULT_INTERVAL_SECS: i64 = 60;

const ENV_LIST: &str = "VOCAB_WIDGET_LIST";
const ENV_STATE: &str = "VOCAB_WIDGET_STATE";
const ENV_LOG: &str = "VOCAB_WIDGET_LOG";

/// Everything the widget needs to know about its surroundings.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub list_path: PathBuf,
    pub state_path: PathBuf,
    pub log_path: PathBuf,
    pub tick_period: Duration,
    pub ambient_period: Duration,
    pub default_interval: i64,
    pub missing_meaning: MissingMeaning,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            list_path: PathBuf::from(DEFAULT_LIST_FILE),
            state_path: PathBuf::from(DEFAULT_STATE_FILE),
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            tick_period: Duration::from_secs(1),
            ambient_period: Duration::from_millis(300),
            default_interval: DEFAULT_INTERVAL_SECS,
            missing_meaning: MissingMeaning::Empty,
        }
    }
}

impl WidgetConfig {
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies path overrides looked up through `lookup`; empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path_for = |key: &str| lookup(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);

        if let Some(path) = path_for(ENV_LIST) {
            self.list_path = path;
        }
        if let Some(path) = path_for(ENV_STATE) {
            self.state_path = path;
        }
        if let Some(path) = path_for(ENV_LOG) {
            self.log_path = path;
        }
        self
    }

    pub fn with_missing_meaning(mut self, missing_meaning: MissingMeaning) -> Self {
        self.missing_meaning = missing_meaning;
        self
    }
}
