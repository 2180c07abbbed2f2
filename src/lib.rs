pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod logger;
pub mod models;
pub mod session;
pub mod settings;
pub mod timer;
pub mod ui;

// Re-exports for convenience
pub use config::WidgetConfig;
pub use error::{Error, Result};
pub use input::{handle_widget_input, Flow};
pub use loader::{format_listing, load_entries, load_or_sentinel, parse_entries, parse_line};
pub use models::{AppState, CardView, Chrome, Entry, MissingMeaning};
pub use session::{DisplaySurface, FlashcardSession};
pub use settings::{load_or_default, JsonFileStore, MemoryStore, PersistedSettings, SettingsStore};
pub use timer::RecurringTimer;
pub use ui::{draw_widget, TerminalSurface};
