pub mod app;
pub mod clipboard;
mod handlers;
mod theme;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use app::App;
use handlers::handle_input;
use ui::draw_ui;

/// Run the terminal UI until the user quits
pub fn run(mut app: App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err);
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(err);
        }
    };

    // Errors come back as values so the terminal is always restored
    let run_result = event_loop(&mut terminal, &mut app, read_key);
    let restore_result = restore_terminal(&mut terminal);

    run_result.and(restore_result)
}

fn restore_terminal<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)
}

/// Next key press, or None when nothing arrived within one tick
fn read_key() -> io::Result<Option<KeyCode>> {
    if !event::poll(Duration::from_millis(200))? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key.code)),
        _ => Ok(None),
    }
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut next_key: impl FnMut() -> io::Result<Option<KeyCode>>,
) -> io::Result<()> {
    loop {
        // Transient statuses clear themselves here, never blocking input
        app.expire_status(Instant::now());

        terminal.draw(|f| draw_ui(f, app))?;

        if let Some(code) = next_key()? {
            if handle_input(app, code) {
                return Ok(());
            }
        }
    }
}
