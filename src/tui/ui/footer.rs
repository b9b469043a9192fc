use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Pane};
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    // Line 1: status message, or a description of the selected control
    let line1 = if !app.status.is_empty() {
        Line::styled(app.status.clone(), t.status_message(app.status_is_error))
    } else {
        match app.focused_pane {
            Pane::Input => Line::from(vec![
                Span::styled("Enter", t.key_hint()),
                Span::styled(":encrypt  ", t.text_muted()),
                Span::styled("Esc", t.key_hint()),
                Span::styled(":controls", t.text_muted()),
            ]),
            Pane::Controls => match app.selected_control() {
                Some(control) => {
                    let state = if app.is_enabled(control) { "ready" } else { "disabled" };
                    Line::from(vec![
                        Span::styled(format!("{} ", control.label()), t.text_primary().add_modifier(Modifier::BOLD)),
                        Span::styled(format!("({}) ~ {}", state, control.description()), t.text_muted()),
                    ])
                }
                None => Line::raw(""),
            },
            Pane::Output => Line::styled(
                format!("Result ~ {} chars", app.result.chars().count()),
                t.text_muted(),
            ),
        }
    };

    // Line 2: Key hints
    let pane_style = |pane: Pane| {
        if app.focused_pane == pane {
            t.key_hint()
        } else {
            t.text_muted()
        }
    };
    let line2 = Line::from(vec![
        Span::styled("Tab", t.key_hint()),
        Span::styled(":", t.text_muted()),
        Span::styled("Input", pane_style(Pane::Input)),
        Span::styled(" ", t.text_muted()),
        Span::styled("Controls", pane_style(Pane::Controls)),
        Span::styled(" ", t.text_muted()),
        Span::styled("Result", pane_style(Pane::Output)),
        Span::styled("  ", t.text_muted()),
        Span::styled("e/d/c/p", t.key_hint()),
        Span::styled(":actions  ", t.text_muted()),
        Span::styled("x", t.key_hint()),
        Span::styled(":clear  ", t.text_muted()),
        Span::styled("q", t.key_hint()),
        Span::styled(":quit", t.text_muted()),
    ]);

    frame.render_widget(Paragraph::new(vec![line1, line2]), area);
}
