use crate::config::DEFAULT_INTERVAL_SECS;
use crate::error::Result;
use crate::logger;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// The scalars that survive a restart. Keys missing from the file fall back
/// one by one to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedSettings {
    pub index: i64,
    pub interval: i64,
    pub frameless: bool,
    pub ambient: bool,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            index: 0,
            interval: DEFAULT_INTERVAL_SECS,
            frameless: false,
            ambient: false,
        }
    }
}

pub trait SettingsStore {
    fn load(&self) -> Result<PersistedSettings>;
    fn save(&self, settings: &PersistedSettings) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<PersistedSettings> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, settings: &PersistedSettings) -> Result<()> {
        let json = serde_json::to_string(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Keeps settings in memory only; used when nothing should touch the disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<Option<PersistedSettings>>,
    writes: RefCell<usize>,
}

impl MemoryStore {
    pub fn with_settings(settings: PersistedSettings) -> Self {
        Self {
            saved: RefCell::new(Some(settings)),
            writes: RefCell::new(0),
        }
    }

    pub fn saved(&self) -> Option<PersistedSettings> {
        *self.saved.borrow()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<PersistedSettings> {
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, settings: &PersistedSettings) -> Result<()> {
        *self.saved.borrow_mut() = Some(*settings);
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

pub fn load_or_default(store: &dyn SettingsStore) -> PersistedSettings {
    match store.load() {
        Ok(settings) => settings,
        Err(e) => {
            logger::log(&format!("Using default settings: {}", e));
            PersistedSettings::default()
        }
    }
}
