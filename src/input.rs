use crate::models::{AppState, OPACITY_STEP};
use crate::session::{DisplaySurface, FlashcardSession};
use crate::settings::SettingsStore;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const MAX_INTERVAL_INPUT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn handle_widget_input<D: DisplaySurface, S: SettingsStore>(
    session: &mut FlashcardSession<D, S>,
    key: KeyEvent,
    app_state: &mut AppState,
    edit_buffer: &mut String,
) -> Flow {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Flow::Quit;
    }

    match *app_state {
        AppState::Widget => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Flow::Quit,
            KeyCode::Left => session.prev(),
            KeyCode::Right => session.next(),
            KeyCode::Char(' ') => session.toggle_run(),
            KeyCode::Char('e') => {
                *edit_buffer = session.interval_display();
                *app_state = AppState::EditInterval;
            }
            KeyCode::Char('t') => session.toggle_topmost(),
            KeyCode::Char('f') => session.toggle_frameless(),
            KeyCode::Char('a') => session.toggle_ambient(),
            KeyCode::Char('+') | KeyCode::Char('=') => session.adjust_opacity(OPACITY_STEP),
            KeyCode::Char('-') => session.adjust_opacity(-OPACITY_STEP),
            _ => {}
        },
        AppState::EditInterval => match key.code {
            KeyCode::Enter => {
                if !session.set_interval(edit_buffer) {
                    *edit_buffer = session.interval_display();
                }
                *app_state = AppState::Widget;
            }
            KeyCode::Esc => {
                *edit_buffer = session.interval_display();
                *app_state = AppState::Widget;
            }
            KeyCode::Backspace => {
                edit_buffer.pop();
            }
            KeyCode::Char(c) => {
                if edit_buffer.chars().count() < MAX_INTERVAL_INPUT {
                    edit_buffer.push(c);
                }
            }
            _ => {}
        },
    }

    Flow::Continue
}
