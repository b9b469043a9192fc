use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::app::{App, Pane};
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Output;

    let block = Block::default()
        .title(t.panel_title("RESULT", focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.output_label.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No result yet. Encrypt or decrypt to see it here.",
            t.text_muted(),
        ));
        frame.render_widget(empty, inner);
        app.output_max_scroll = 0;
        app.output_scroll = 0;
        return;
    }

    let output = result_paragraph(app);

    // The result is usually one long line, so count rows after wrapping
    let max_scroll = output
        .line_count(inner.width)
        .saturating_sub(inner.height as usize);
    app.output_max_scroll = max_scroll;
    app.output_scroll = app.output_scroll.min(max_scroll);

    frame.render_widget(output.scroll((app.output_scroll as u16, 0)), inner);
}

fn result_paragraph(app: &App) -> Paragraph<'static> {
    let t = theme();
    let mut lines = vec![Line::styled(app.output_label.clone(), t.output_label())];
    lines.extend(
        app.result
            .lines()
            .map(|l| Line::styled(l.to_string(), t.output_text())),
    );

    Paragraph::new(lines).wrap(Wrap { trim: false })
}
