use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct WidgetLayout {
    pub topbar_area: Rect,
    pub word_area: Rect,
    pub meaning_area: Rect,
    pub controls_area: Rect,
    pub interval_area: Rect,
    pub chrome_area: Rect,
}

pub fn calculate_widget_chunks(area: Rect) -> WidgetLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Min(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    WidgetLayout {
        topbar_area: chunks[0],
        word_area: chunks[1],
        meaning_area: chunks[2],
        controls_area: chunks[3],
        interval_area: chunks[4],
        chrome_area: chunks[5],
    }
}
