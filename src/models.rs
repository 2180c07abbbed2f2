pub const PLACEHOLDER_MEANING: &str = "(No meaning provided)";

pub const OPACITY_MIN: f32 = 0.5;
pub const OPACITY_MAX: f32 = 1.0;
pub const OPACITY_STEP: f32 = 0.05;
pub const DEFAULT_OPACITY: f32 = 0.90;

/// One word/meaning pair from the source list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub meaning: String,
}

impl Entry {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
        }
    }
}

/// What a line without a `" - "` separator gets as its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingMeaning {
    #[default]
    Empty,
    Placeholder,
}

impl MissingMeaning {
    pub fn text(self) -> &'static str {
        match self {
            MissingMeaning::Empty => "",
            MissingMeaning::Placeholder => PLACEHOLDER_MEANING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Widget,
    EditInterval,
}

/// The card as the display surface shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub word: String,
    pub meaning: String,
    pub remaining_seconds: i64,
    pub running: bool,
    pub position: usize,
    pub total: usize,
}

/// Window chrome toggles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chrome {
    pub always_on_top: bool,
    pub frameless: bool,
    pub ambient: bool,
    pub opacity: f32,
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            always_on_top: true,
            frameless: false,
            ambient: false,
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl Chrome {
    /// Moves opacity by `delta`, snapped to the step grid and clamped.
    pub fn adjust_opacity(&mut self, delta: f32) {
        let steps = ((self.opacity + delta) / OPACITY_STEP).round();
        self.opacity = (steps * OPACITY_STEP).clamp(OPACITY_MIN, OPACITY_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_meaning_text() {
        assert_eq!(MissingMeaning::Empty.text(), "");
        assert_eq!(MissingMeaning::Placeholder.text(), "(No meaning provided)");
        assert_eq!(MissingMeaning::default(), MissingMeaning::Empty);
    }

    #[test]
    fn test_chrome_defaults() {
        let chrome = Chrome::default();
        assert!(chrome.always_on_top);
        assert!(!chrome.frameless);
        assert!(!chrome.ambient);
        assert!((chrome.opacity - 0.90).abs() < 1e-6);
    }

    #[test]
    fn test_opacity_clamped_to_range() {
        let mut chrome = Chrome::default();
        for _ in 0..10 {
            chrome.adjust_opacity(OPACITY_STEP);
        }
        assert!((chrome.opacity - OPACITY_MAX).abs() < 1e-6);

        for _ in 0..20 {
            chrome.adjust_opacity(-OPACITY_STEP);
        }
        assert!((chrome.opacity - OPACITY_MIN).abs() < 1e-6);
    }

    #[test]
    fn test_opacity_single_step() {
        let mut chrome = Chrome::default();
        chrome.adjust_opacity(-OPACITY_STEP);
        assert!((chrome.opacity - 0.85).abs() < 1e-6);
    }
}
