mod footer;
mod header;
mod input_panel;
mod output_panel;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::app::{App, Control, Pane};

pub fn draw_ui(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Compact header
            Constraint::Min(5),    // Input box
            Constraint::Length(3), // Controls bar
            Constraint::Min(6),    // Result
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    header::render(frame, app, root[0]);
    input_panel::render(frame, app, root[1]);
    render_controls(frame, app, root[2]);
    output_panel::render(frame, app, root[3]);
    footer::render(frame, app, root[4]);
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let t = crate::tui::theme::theme();
    let focused = app.focused_pane == Pane::Controls;

    let block = Block::default()
        .title(t.panel_title("CONTROLS", focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Controls as horizontal bar with selection highlight
    let mut spans = vec![];
    for (i, control) in Control::ALL.iter().enumerate() {
        let selected = i == app.control_index && focused;
        let enabled = app.is_enabled(*control);

        spans.push(Span::styled(
            format!("[{}]", control.label()),
            t.control(enabled, selected),
        ));
        spans.push(Span::styled(format!("{} ", control.shortcut()), t.text_muted()));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::clipboard::MemoryClipboard;
    use crate::tui::handlers::handle_input;
    use crossterm::event::KeyCode;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use ratatui::buffer::Buffer;
    use std::time::Duration;

    fn test_app() -> App {
        let cipher = endecript_core::builtin_cipher().unwrap();
        App::with_parts(cipher, Box::new(MemoryClipboard::new()), true, Duration::from_secs(3))
    }

    fn render(terminal: &mut Terminal<TestBackend>, app: &mut App) -> Buffer {
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_long_result_scrolls() {
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        let mut app = test_app();
        app.input = "abcdefghij".repeat(100);
        app.handle_encrypt();
        app.focused_pane = Pane::Output;

        let top = render(&mut terminal, &mut app);
        assert!(app.output_max_scroll > 0);

        handle_input(&mut app, KeyCode::Down);
        let scrolled = render(&mut terminal, &mut app);
        assert_eq!(app.output_scroll, 1);
        assert_ne!(top, scrolled);
    }

    #[test]
    fn test_scroll_stops_at_end() {
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        let mut app = test_app();
        app.input = "abcdefghij".repeat(100);
        app.handle_encrypt();
        app.focused_pane = Pane::Output;
        render(&mut terminal, &mut app);

        for _ in 0..500 {
            handle_input(&mut app, KeyCode::Down);
        }
        assert_eq!(app.output_scroll, app.output_max_scroll);
        let bottom = render(&mut terminal, &mut app);

        // One step back up is visible right away
        handle_input(&mut app, KeyCode::Up);
        let above = render(&mut terminal, &mut app);
        assert_eq!(app.output_scroll, app.output_max_scroll - 1);
        assert_ne!(bottom, above);
    }

    #[test]
    fn test_new_result_resets_scroll() {
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        let mut app = test_app();
        app.input = "abcdefghij".repeat(100);
        app.handle_encrypt();
        render(&mut terminal, &mut app);
        app.scroll_output_down();
        assert_eq!(app.output_scroll, 1);

        app.input = "hello".to_string();
        app.handle_encrypt();
        render(&mut terminal, &mut app);
        assert_eq!(app.output_scroll, 0);
        assert_eq!(app.output_max_scroll, 0);
    }
}
