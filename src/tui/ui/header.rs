use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let source = if app.config_source.len() > 45 {
        let cut = app.config_source.len() - 42;
        let cut = (cut..app.config_source.len())
            .find(|&i| app.config_source.is_char_boundary(i))
            .unwrap_or(app.config_source.len());
        format!("...{}", &app.config_source[cut..])
    } else {
        app.config_source.clone()
    };

    let builtin = app.config_source.is_empty() || app.config_source == "built-in key set";
    let badge = if builtin { "BUILT-IN" } else { "CONFIG" };

    let line = Line::from(vec![
        // App name
        Span::styled("endecript ", t.text_primary().add_modifier(Modifier::BOLD)),
        // Key set badge
        Span::styled(format!("[{}] ", badge), t.source_badge(builtin)),
        // Key set source
        Span::styled(source, t.text_muted()),
        Span::raw("  "),
        Span::styled(format!("clipboard: {}", app.clipboard_name()), t.text_muted()),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
}
