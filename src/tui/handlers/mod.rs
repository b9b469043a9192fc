use std::time::Instant;

use crossterm::event::KeyCode;

use crate::tui::app::{App, Control, Pane};

/// Handle input and return true if the app should quit
pub fn handle_input(app: &mut App, key: KeyCode) -> bool {
    // Global navigation: Tab cycles panes
    match key {
        KeyCode::Tab => {
            app.cycle_pane_forward();
            return false;
        }
        KeyCode::BackTab => {
            app.cycle_pane_backward();
            return false;
        }
        _ => {}
    }

    // Pane-specific input
    handle_pane_input(app, key, Instant::now())
}

fn handle_pane_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match app.focused_pane {
        Pane::Input => {
            handle_text_input(app, key, now);
            false
        }
        Pane::Controls => handle_controls_input(app, key, now),
        Pane::Output => handle_output_input(app, key),
    }
}

fn handle_text_input(app: &mut App, key: KeyCode, now: Instant) {
    // Every printable key is text here, so leaving the pane takes Esc or Tab
    match key {
        KeyCode::Char(c) => app.push_char(c),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Enter => {
            app.activate(Control::Encrypt, now);
        }
        KeyCode::Esc => app.focused_pane = Pane::Controls,
        _ => {}
    }
}

fn handle_controls_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    // Controls are displayed horizontally, so use Left/Right to navigate
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Left | KeyCode::Char('h') => app.select_previous_control(),
        KeyCode::Right | KeyCode::Char('l') => app.select_next_control(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_selected(now);
        }
        KeyCode::Char('i') => app.focused_pane = Pane::Input,
        KeyCode::Char('x') => app.clear_input(),
        KeyCode::Char(c) => {
            if let Some(control) = Control::from_shortcut(c) {
                app.activate(control, now);
            }
        }
        _ => {}
    }
    false
}

fn handle_output_input(app: &mut App, key: KeyCode) -> bool {
    // Result scrolling, bounded by what the last render could show
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Up | KeyCode::Char('k') => app.scroll_output_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_output_down(),
        KeyCode::Esc => app.focused_pane = Pane::Controls,
        _ => {}
    }
    false
}
