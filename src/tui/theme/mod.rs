mod palette;

use ratatui::prelude::*;

pub use palette::Palette;

pub struct Theme {
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::new(),
        }
    }

    // Panel border style
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.palette.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.border_default)
        }
    }

    // Header badge for the key set source
    pub fn source_badge(&self, builtin: bool) -> Style {
        let bg = if builtin {
            self.palette.bg_badge_builtin
        } else {
            self.palette.bg_badge_file
        };
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    // Control button style: selected > enabled > disabled
    pub fn control(&self, enabled: bool, selected: bool) -> Style {
        if selected {
            let style = Style::default()
                .fg(self.palette.selection_fg)
                .bg(self.palette.selection_bg)
                .add_modifier(Modifier::BOLD);
            if enabled {
                style
            } else {
                style.add_modifier(Modifier::DIM)
            }
        } else if enabled {
            self.text_secondary()
        } else {
            Style::default()
                .fg(self.palette.text_muted)
                .add_modifier(Modifier::CROSSED_OUT)
        }
    }

    // Primary text
    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    // Secondary/dimmed text
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    // Muted text (hints, labels)
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    // Title style for focused panel
    pub fn title_focused(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    // Title style for unfocused panel
    pub fn title_unfocused(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    // "Encrypted Message:" / "Decrypted Message:"
    pub fn output_label(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    // Result text
    pub fn output_text(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    // Text cursor in the input box
    pub fn cursor(&self) -> Style {
        Style::default()
            .fg(self.palette.selection_fg)
            .bg(self.palette.accent_primary)
    }

    // Key hint style (the key part like "Tab")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    // Status message style
    pub fn status_message(&self, is_error: bool) -> Style {
        if is_error {
            Style::default()
                .fg(self.palette.accent_danger)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.accent_success)
        }
    }

    // Panel title with optional focus indicator
    pub fn panel_title(&self, title: &str, focused: bool) -> Line<'_> {
        if focused {
            Line::styled(format!(" {} ", title), self.title_focused())
        } else {
            Line::styled(format!(" {} ", title), self.title_unfocused())
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::new)
}
