use crate::config::WidgetConfig;
use crate::error::Result;
use crate::loader::sentinel_entry;
use crate::logger;
use crate::models::{CardView, Chrome, Entry};
use crate::settings::{load_or_default, PersistedSettings, SettingsStore};

/// Whatever renders the widget. The session pushes to it after every change.
pub trait DisplaySurface {
    fn show_card(&mut self, card: &CardView);
    fn apply_chrome(&mut self, chrome: &Chrome);
}

/// Cycles through the entries on a countdown.
///
/// `position` always stays inside `0..entries.len()` and `interval_seconds`
/// is always at least 1.
#[derive(Debug)]
pub struct FlashcardSession<D: DisplaySurface, S: SettingsStore> {
    entries: Vec<Entry>,
    position: usize,
    interval_seconds: i64,
    remaining_seconds: i64,
    running: bool,
    chrome: Chrome,
    surface: D,
    store: S,
    last_save_error: Option<String>,
}

impl<D: DisplaySurface, S: SettingsStore> FlashcardSession<D, S> {
    /// Seeds the session from the store and pushes the first view.
    pub fn new(entries: Vec<Entry>, surface: D, store: S, config: &WidgetConfig) -> Self {
        let entries = if entries.is_empty() {
            vec![sentinel_entry(&config.list_path)]
        } else {
            entries
        };

        let saved = load_or_default(&store);
        let interval_seconds = if saved.interval >= 1 {
            saved.interval
        } else {
            logger::log(&format!(
                "Ignoring saved interval {}, using {}",
                saved.interval, config.default_interval
            ));
            config.default_interval.max(1)
        };
        let position = saved.index.rem_euclid(entries.len() as i64) as usize;

        let mut session = Self {
            entries,
            position,
            interval_seconds,
            remaining_seconds: interval_seconds,
            running: true,
            chrome: Chrome {
                frameless: saved.frameless,
                ambient: saved.ambient,
                ..Chrome::default()
            },
            surface,
            store,
            last_save_error: None,
        };
        session.update_view();
        session
    }

    pub fn next(&mut self) {
        self.step(1);
        self.update_view();
    }

    pub fn prev(&mut self) {
        self.step(-1);
        self.update_view();
    }

    /// Flips pause/resume. The countdown keeps its value.
    pub fn toggle_run(&mut self) {
        self.running = !self.running;
        self.update_view();
    }

    /// Accepts `candidate` only if it is an integer of at least 1. Returns
    /// whether it was accepted; a rejected edit leaves everything untouched.
    pub fn set_interval(&mut self, candidate: &str) -> bool {
        match candidate.trim().parse::<i64>() {
            Ok(seconds) if seconds >= 1 => {
                self.interval_seconds = seconds;
                self.remaining_seconds = seconds;
                self.update_view();
                true
            }
            _ => {
                logger::log(&format!("Rejected interval {:?}", candidate));
                false
            }
        }
    }

    /// One period of the host's tick timer.
    pub fn on_tick(&mut self) {
        if self.running {
            self.remaining_seconds -= 1;
            if self.remaining_seconds <= 0 {
                self.step(1);
            }
        }
        self.update_view();
    }

    pub fn toggle_topmost(&mut self) {
        self.chrome.always_on_top = !self.chrome.always_on_top;
        self.update_view();
    }

    pub fn toggle_frameless(&mut self) {
        self.chrome.frameless = !self.chrome.frameless;
        self.update_view();
    }

    pub fn toggle_ambient(&mut self) {
        self.chrome.ambient = !self.chrome.ambient;
        self.update_view();
    }

    pub fn adjust_opacity(&mut self, delta: f32) {
        self.chrome.adjust_opacity(delta);
        self.update_view();
    }

    fn step(&mut self, delta: i64) {
        let len = self.entries.len() as i64;
        self.position = (self.position as i64 + delta).rem_euclid(len) as usize;
        self.remaining_seconds = self.interval_seconds;
    }

    pub fn view(&self) -> CardView {
        let entry = &self.entries[self.position];
        CardView {
            word: entry.word.clone(),
            meaning: entry.meaning.clone(),
            remaining_seconds: self.remaining_seconds,
            running: self.running,
            position: self.position,
            total: self.entries.len(),
        }
    }

    pub fn settings(&self) -> PersistedSettings {
        PersistedSettings {
            index: self.position as i64,
            interval: self.interval_seconds,
            frameless: self.chrome.frameless,
            ambient: self.chrome.ambient,
        }
    }

    pub fn persist(&self) -> Result<()> {
        self.store.save(&self.settings())
    }

    /// Pushes card and chrome to the surface, then saves the settings.
    /// A failed save is otherwise ignored; it is logged only when the error
    /// differs from the previous one.
    pub fn update_view(&mut self) {
        let card = self.view();
        self.surface.show_card(&card);
        self.surface.apply_chrome(&self.chrome);

        match self.persist() {
            Ok(()) => {
                if self.last_save_error.take().is_some() {
                    logger::log("Saving settings works again");
                }
            }
            Err(e) => {
                let message = e.to_string();
                if self.last_save_error.as_deref() != Some(message.as_str()) {
                    logger::log(&format!("Failed to save settings: {}", message));
                    self.last_save_error = Some(message);
                }
            }
        }
    }

    pub fn interval_display(&self) -> String {
        self.interval_seconds.to_string()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn interval_seconds(&self) -> i64 {
        self.interval_seconds
    }

    pub fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn chrome(&self) -> Chrome {
        self.chrome
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// For surface-only updates (animation frames) that don't touch session state.
    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
