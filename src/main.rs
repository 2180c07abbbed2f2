use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use vocab_widget::{
    draw_widget, handle_widget_input, load_or_sentinel, logger, AppState, FlashcardSession, Flow,
    JsonFileStore, RecurringTimer, TerminalSurface, WidgetConfig,
};

type Widget = FlashcardSession<TerminalSurface, JsonFileStore>;

fn main() -> io::Result<()> {
    let config = WidgetConfig::from_env();
    logger::init(&config.log_path);
    logger::log("Widget starting");

    let entries = load_or_sentinel(&config.list_path, config.missing_meaning);
    let store = JsonFileStore::new(&config.state_path);
    let mut session = FlashcardSession::new(entries, TerminalSurface::default(), store, &config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, &config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Widget stopped with error: {}", e));
    } else {
        logger::log(&format!(
            "Widget closed, settings in {}",
            session.store().path().display()
        ));
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Widget,
    config: &WidgetConfig,
) -> io::Result<()> {
    let mut app_state = AppState::Widget;
    let mut edit_buffer = session.interval_display();

    let started = Instant::now();
    let mut tick_timer = RecurringTimer::new(config.tick_period, started);
    let mut ambient_timer = RecurringTimer::new(config.ambient_period, started);

    loop {
        if app_state == AppState::Widget {
            edit_buffer = session.interval_display();
        }
        terminal.draw(|f| draw_widget(f, session.surface(), app_state, &edit_buffer))?;

        let now = Instant::now();
        let timeout = tick_timer.until_due(now).min(ambient_timer.until_due(now));
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_widget_input(session, key, &mut app_state, &mut edit_buffer) == Flow::Quit
        {
            break;
        }

        let now = Instant::now();
        if tick_timer.due(now) {
            session.on_tick();
        }
        if ambient_timer.due(now) {
            session.surface_mut().on_ambient_tick();
        }
    }

    if let Err(e) = session.persist() {
        logger::log(&format!("Final save failed: {}", e));
    }
    Ok(())
}
