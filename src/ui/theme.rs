use ratatui::style::Color;

pub type Rgb = (u8, u8, u8);

pub const BASE_BACKGROUND: Rgb = (0x1e, 0x1e, 0x1e);
pub const WORD_FOREGROUND: Rgb = (0xff, 0xff, 0xff);
pub const MEANING_FOREGROUND: Rgb = (0xcf, 0xcf, 0xcf);
pub const CONTROL_FOREGROUND: Rgb = (0xcc, 0xcc, 0xcc);
pub const MUTED_FOREGROUND: Rgb = (0xaa, 0xaa, 0xaa);
pub const BUTTON_BACKGROUND: Rgb = (0x3a, 0x3a, 0x3a);
pub const FIELD_BACKGROUND: Rgb = (0x22, 0x22, 0x22);

/// Background palette for the ambient animation: a slow pulse into blue and back.
pub const AMBIENT_STEPS: [Rgb; 18] = [
    (0x1e, 0x1e, 0x1e),
    (0x20, 0x20, 0x24),
    (0x21, 0x22, 0x28),
    (0x22, 0x24, 0x2c),
    (0x23, 0x25, 0x31),
    (0x24, 0x27, 0x36),
    (0x25, 0x28, 0x3a),
    (0x26, 0x2a, 0x3f),
    (0x27, 0x2b, 0x43),
    (0x28, 0x2c, 0x46),
    (0x27, 0x2b, 0x43),
    (0x26, 0x2a, 0x3f),
    (0x25, 0x28, 0x3a),
    (0x24, 0x27, 0x36),
    (0x23, 0x25, 0x31),
    (0x22, 0x24, 0x2c),
    (0x21, 0x22, 0x28),
    (0x20, 0x20, 0x24),
];

#[derive(Debug, Clone, Default)]
pub struct AmbientCycle {
    step: usize,
}

impl AmbientCycle {
    pub fn advance(&mut self) {
        self.step = (self.step + 1) % AMBIENT_STEPS.len();
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }

    pub fn current(&self) -> Rgb {
        AMBIENT_STEPS[self.step]
    }
}

pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Mixes `fg` toward `bg`; an opacity of 1.0 leaves `fg` untouched.
/// Terminals have no window alpha, so opacity dims the text instead.
pub fn faded(fg: Rgb, bg: Rgb, opacity: f32) -> Color {
    let alpha = opacity.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * alpha).round() as u8;
    Color::Rgb(mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}
