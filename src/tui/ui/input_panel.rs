use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::app::{App, Pane};
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Input;

    let block = Block::default()
        .title(t.panel_title("INPUT", focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.input.is_empty() && !focused {
        let empty = Paragraph::new(Line::styled(
            "Type or paste a message to encrypt or decrypt.",
            t.text_muted(),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    let mut spans = vec![Span::styled(app.input.clone(), t.text_primary())];
    if focused {
        spans.push(Span::styled(" ", t.cursor()));
    }

    let input = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false });
    frame.render_widget(input, inner);
}
