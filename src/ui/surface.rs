use crate::models::{CardView, Chrome};
use crate::session::DisplaySurface;
use crate::ui::theme::{AmbientCycle, Rgb, BASE_BACKGROUND};

/// Holds the last card and chrome the session pushed, for the next draw.
#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    card: Option<CardView>,
    chrome: Chrome,
    ambient: AmbientCycle,
}

impl TerminalSurface {
    pub fn card(&self) -> Option<&CardView> {
        self.card.as_ref()
    }

    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    /// One frame of the background animation; does nothing while ambient is off.
    pub fn on_ambient_tick(&mut self) {
        if self.chrome.ambient {
            self.ambient.advance();
        }
    }

    pub fn background(&self) -> Rgb {
        if self.chrome.ambient {
            self.ambient.current()
        } else {
            BASE_BACKGROUND
        }
    }
}

impl DisplaySurface for TerminalSurface {
    fn show_card(&mut self, card: &CardView) {
        self.card = Some(card.clone());
    }

    fn apply_chrome(&mut self, chrome: &Chrome) {
        if self.chrome.ambient && !chrome.ambient {
            self.ambient.reset();
        }
        self.chrome = *chrome;
    }
}
