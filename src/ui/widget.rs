use crate::models::AppState;
use crate::ui::layout::calculate_widget_chunks;
use crate::ui::surface::TerminalSurface;
use crate::ui::theme::{
    faded, rgb, BUTTON_BACKGROUND, CONTROL_FOREGROUND, FIELD_BACKGROUND, MEANING_FOREGROUND,
    MUTED_FOREGROUND, WORD_FOREGROUND,
};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn checkbox(label: &str, checked: bool) -> String {
    format!("[{}] {}", if checked { "x" } else { " " }, label)
}

/// Renders the widget. `interval_field` is the text of the seconds field:
/// the saved interval, or the edit buffer while editing.
pub fn draw_widget(
    f: &mut Frame,
    surface: &TerminalSurface,
    app_state: AppState,
    interval_field: &str,
) {
    let chrome = surface.chrome();
    let bg = surface.background();
    let base = Style::default().bg(rgb(bg));
    let fg = |color| faded(color, bg, chrome.opacity);

    let borders = if chrome.frameless {
        Borders::NONE
    } else {
        Borders::ALL
    };
    let mut frame_block = Block::default().borders(borders).style(base);
    if !chrome.frameless {
        frame_block = frame_block
            .title("Vocabulary")
            .border_style(Style::default().fg(fg(MUTED_FOREGROUND)));
    }
    f.render_widget(frame_block, f.area());

    let layout = calculate_widget_chunks(f.area());

    let pin = if chrome.always_on_top { "📌 " } else { "" };
    let position = surface
        .card()
        .map(|card| format!("{}{} / {}", pin, card.position + 1, card.total))
        .unwrap_or_default();
    let topbar = Line::from(vec![
        Span::styled(position, Style::default().fg(fg(MUTED_FOREGROUND))),
        Span::raw("  "),
        Span::styled(
            " ✕ ",
            Style::default()
                .fg(fg(WORD_FOREGROUND))
                .bg(rgb(BUTTON_BACKGROUND)),
        ),
    ]);
    f.render_widget(
        Paragraph::new(topbar).alignment(Alignment::Right),
        layout.topbar_area,
    );

    let Some(card) = surface.card() else {
        return;
    };

    let word = Paragraph::new(card.word.as_str())
        .style(
            Style::default()
                .fg(fg(WORD_FOREGROUND))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(word, layout.word_area);

    let meaning = Paragraph::new(card.meaning.as_str())
        .style(Style::default().fg(fg(MEANING_FOREGROUND)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(meaning, layout.meaning_area);

    let button = Style::default()
        .fg(fg(WORD_FOREGROUND))
        .bg(rgb(BUTTON_BACKGROUND));
    let toggle_label = if card.running {
        " ⏸ Pause "
    } else {
        " ▶ Resume "
    };
    let controls = Line::from(vec![
        Span::styled(" ◀ Prev ", button),
        Span::raw("  "),
        Span::styled(" Next ▶ ", button),
        Span::raw("  "),
        Span::styled(toggle_label, button),
    ]);
    f.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        layout.controls_area,
    );

    let mut field_style = Style::default()
        .fg(fg(WORD_FOREGROUND))
        .bg(rgb(FIELD_BACKGROUND));
    if app_state == AppState::EditInterval {
        field_style = field_style.add_modifier(Modifier::UNDERLINED);
    }
    let interval = Line::from(vec![
        Span::styled("Seconds: ", Style::default().fg(fg(MUTED_FOREGROUND))),
        Span::styled(format!(" {:^5} ", interval_field), field_style),
        Span::styled(
            format!("  {}s", card.remaining_seconds),
            Style::default().fg(fg(MUTED_FOREGROUND)),
        ),
    ]);
    f.render_widget(
        Paragraph::new(interval).alignment(Alignment::Center),
        layout.interval_area,
    );

    let chrome_line = Line::from(vec![Span::styled(
        format!(
            "{}  Opacity: {:.2}  {}  {}",
            checkbox("Always on top", chrome.always_on_top),
            chrome.opacity,
            checkbox("Frameless", chrome.frameless),
            checkbox("Ambient", chrome.ambient),
        ),
        Style::default().fg(fg(CONTROL_FOREGROUND)),
    )]);
    f.render_widget(
        Paragraph::new(chrome_line).alignment(Alignment::Center),
        layout.chrome_area,
    );
}
