use std::time::{Duration, Instant};

use endecript_core::{Cipher, CipherConfig, ConfigError, Mode};

use crate::tui::clipboard::{self, ClipboardProvider};

const MAX_INPUT_CHARS: usize = 4096;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pane {
    Input,
    Controls,
    Output,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Control {
    Encrypt,
    Decrypt,
    Copy,
    Paste,
}

impl Control {
    pub const ALL: [Control; 4] = [Control::Encrypt, Control::Decrypt, Control::Copy, Control::Paste];

    pub fn label(self) -> &'static str {
        match self {
            Control::Encrypt => "Encrypt",
            Control::Decrypt => "Decrypt",
            Control::Copy => "Copy",
            Control::Paste => "Paste",
        }
    }

    pub fn shortcut(self) -> char {
        match self {
            Control::Encrypt => 'e',
            Control::Decrypt => 'd',
            Control::Copy => 'c',
            Control::Paste => 'p',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Control::Encrypt => "Encrypt the input text",
            Control::Decrypt => "Decrypt the input text",
            Control::Copy => "Copy the result to the clipboard",
            Control::Paste => "Replace the input with the clipboard",
        }
    }

    pub fn from_shortcut(c: char) -> Option<Control> {
        Control::ALL.into_iter().find(|control| control.shortcut() == c)
    }
}

pub struct App {
    pub focused_pane: Pane,
    pub control_index: usize,
    pub input: String,
    pub output_label: String,
    pub result: String,
    pub output_scroll: usize,
    /// Last scroll limit seen by the result panel, in wrapped rows
    pub output_max_scroll: usize,
    pub status: String,
    pub status_is_error: bool,
    pub config_source: String,
    status_expires: Option<Instant>,
    status_timeout: Duration,
    lowercase_input: bool,
    cipher: Cipher,
    clipboard: Box<dyn ClipboardProvider>,
}

impl App {
    pub fn new(config: &CipherConfig) -> Result<Self, ConfigError> {
        let cipher = config.cipher()?;
        let clipboard = clipboard::from_config(&config.clipboard);
        let mut app = Self::with_parts(
            cipher,
            clipboard,
            config.lowercase_input,
            Duration::from_millis(config.status_timeout_ms),
        );
        app.config_source = match &config.source_path {
            Some(path) => path.display().to_string(),
            None => "built-in key set".to_string(),
        };
        Ok(app)
    }

    pub fn with_parts(
        cipher: Cipher,
        clipboard: Box<dyn ClipboardProvider>,
        lowercase_input: bool,
        status_timeout: Duration,
    ) -> Self {
        Self {
            focused_pane: Pane::Input,
            control_index: 0,
            input: String::new(),
            output_label: String::new(),
            result: String::new(),
            output_scroll: 0,
            output_max_scroll: 0,
            status: String::new(),
            status_is_error: false,
            config_source: String::new(),
            status_expires: None,
            status_timeout,
            lowercase_input,
            cipher,
            clipboard,
        }
    }

    pub fn clipboard_name(&self) -> &str {
        self.clipboard.name()
    }

    pub fn selected_control(&self) -> Option<Control> {
        Control::ALL.get(self.control_index).copied()
    }

    /// Encrypt/Decrypt need input, Copy needs a result, Paste is always available
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Encrypt | Control::Decrypt => !self.input.trim().is_empty(),
            Control::Copy => !self.result.trim().is_empty(),
            Control::Paste => true,
        }
    }

    /// Run a control if it is enabled; returns whether it ran
    pub fn activate(&mut self, control: Control, now: Instant) -> bool {
        if !self.is_enabled(control) {
            return false;
        }
        match control {
            Control::Encrypt => self.handle_encrypt(),
            Control::Decrypt => self.handle_decrypt(),
            Control::Copy => self.copy_to_clipboard(now),
            Control::Paste => self.paste_from_clipboard(now),
        }
        true
    }

    pub fn activate_selected(&mut self, now: Instant) -> bool {
        match self.selected_control() {
            Some(control) => self.activate(control, now),
            None => false,
        }
    }

    pub fn handle_encrypt(&mut self) {
        self.transform(Mode::Encrypt);
    }

    pub fn handle_decrypt(&mut self) {
        self.transform(Mode::Decrypt);
    }

    fn transform(&mut self, mode: Mode) {
        let input = if self.lowercase_input {
            self.input.to_lowercase()
        } else {
            self.input.clone()
        };

        self.result = self.cipher.apply(mode, &input);
        self.output_label = match mode {
            Mode::Encrypt => "Encrypted Message:".to_string(),
            Mode::Decrypt => "Decrypted Message:".to_string(),
        };
        self.output_scroll = 0;
    }

    pub fn copy_to_clipboard(&mut self, now: Instant) {
        match self.clipboard.set_text(&self.result) {
            Ok(()) => self.set_transient_status("Copied to clipboard!", now),
            Err(err) => self.set_error(format!("Failed to copy: {}", err)),
        }
    }

    pub fn paste_from_clipboard(&mut self, now: Instant) {
        match self.clipboard.get_text() {
            Ok(text) => {
                self.input = text.chars().take(MAX_INPUT_CHARS).collect();
                self.set_transient_status("Pasted from clipboard!", now);
            }
            Err(err) => self.set_error(format!("Failed to read clipboard contents: {}", err)),
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input.chars().count() < MAX_INPUT_CHARS {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status = msg.into();
        self.status_is_error = false;
        self.status_expires = None;
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.status = msg.into();
        self.status_is_error = true;
        self.status_expires = None;
    }

    /// Show `msg` until `status_timeout` has passed
    pub fn set_transient_status<S: Into<String>>(&mut self, msg: S, now: Instant) {
        self.set_status(msg);
        self.status_expires = Some(now + self.status_timeout);
    }

    /// Clear a transient status whose time is up; called every UI tick
    pub fn expire_status(&mut self, now: Instant) {
        if let Some(deadline) = self.status_expires {
            if now >= deadline {
                self.status.clear();
                self.status_expires = None;
            }
        }
    }

    pub fn scroll_output_up(&mut self) {
        self.output_scroll = self.output_scroll.saturating_sub(1);
    }

    pub fn scroll_output_down(&mut self) {
        if self.output_scroll < self.output_max_scroll {
            self.output_scroll += 1;
        }
    }

    pub fn select_previous_control(&mut self) {
        self.control_index = self.control_index.saturating_sub(1);
    }

    pub fn select_next_control(&mut self) {
        if self.control_index + 1 < Control::ALL.len() {
            self.control_index += 1;
        }
    }

    pub fn cycle_pane_forward(&mut self) {
        self.focused_pane = match self.focused_pane {
            Pane::Input => Pane::Controls,
            Pane::Controls => Pane::Output,
            Pane::Output => Pane::Input,
        };
    }

    pub fn cycle_pane_backward(&mut self) {
        self.focused_pane = match self.focused_pane {
            Pane::Input => Pane::Output,
            Pane::Controls => Pane::Input,
            Pane::Output => Pane::Controls,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::clipboard::{ClipboardError, MemoryClipboard};

    struct BrokenClipboard;

    impl ClipboardProvider for BrokenClipboard {
        fn name(&self) -> &str {
            "broken"
        }

        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::CommandFailed("no display".to_string()))
        }

        fn get_text(&mut self) -> Result<String, ClipboardError> {
            Err(ClipboardError::CommandFailed("no display".to_string()))
        }
    }

    fn test_app(clipboard: Box<dyn ClipboardProvider>) -> App {
        let cipher = endecript_core::builtin_cipher().unwrap();
        App::with_parts(cipher, clipboard, true, Duration::from_secs(3))
    }

    #[test]
    fn test_controls_disabled_when_empty() {
        let app = test_app(Box::new(MemoryClipboard::new()));
        assert!(!app.is_enabled(Control::Encrypt));
        assert!(!app.is_enabled(Control::Decrypt));
        assert!(!app.is_enabled(Control::Copy));
        assert!(app.is_enabled(Control::Paste));
    }

    #[test]
    fn test_whitespace_input_keeps_controls_disabled() {
        let mut app = test_app(Box::new(MemoryClipboard::new()));
        app.input = "   \t".to_string();
        assert!(!app.is_enabled(Control::Encrypt));
        assert!(!app.activate(Control::Encrypt, Instant::now()));
        assert!(app.output_label.is_empty());
    }

    #[test]
    fn test_encrypt_lowercases_and_labels() {
        let mut app = test_app(Box::new(MemoryClipboard::new()));
        app.input = "Hello World".to_string();
        assert!(app.is_enabled(Control::Encrypt));

        assert!(app.activate(Control::Encrypt, Instant::now()));
        assert_eq!(app.output_label, "Encrypted Message:");
        assert_eq!(app.result, "egtvx wlrvt");
        assert!(app.is_enabled(Control::Copy));
    }

    #[test]
    fn test_decrypt() {
        let mut app = test_app(Box::new(MemoryClipboard::new()));
        app.input = "EGTVX wlrvt".to_string();
        app.handle_decrypt();
        assert_eq!(app.output_label, "Decrypted Message:");
        assert_eq!(app.result, "hello world");
    }

    #[test]
    fn test_keep_case_when_configured() {
        let cipher = endecript_core::builtin_cipher().unwrap();
        let mut app = App::with_parts(
            cipher,
            Box::new(MemoryClipboard::new()),
            false,
            Duration::from_secs(3),
        );
        app.input = "HELLO".to_string();
        app.handle_encrypt();
        assert_eq!(app.result, "HELLO");
    }

    #[test]
    fn test_copy_then_paste_round_trip() {
        let shared = MemoryClipboard::new();
        let mut app = test_app(Box::new(shared.clone()));
        let now = Instant::now();

        app.input = "attack at dawn".to_string();
        app.handle_encrypt();
        let encrypted = app.result.clone();

        assert!(app.activate(Control::Copy, now));
        assert_eq!(app.status, "Copied to clipboard!");
        assert_eq!(shared.clone().get_text().unwrap(), encrypted);

        app.clear_input();
        assert!(app.activate(Control::Paste, now));
        assert_eq!(app.status, "Pasted from clipboard!");
        assert_eq!(app.input, encrypted);

        app.handle_decrypt();
        assert_eq!(app.result, "attack at dawn");
    }

    #[test]
    fn test_transient_status_expires() {
        let mut app = test_app(Box::new(MemoryClipboard::new()));
        let start = Instant::now();
        app.result = "x".to_string();
        app.copy_to_clipboard(start);
        assert_eq!(app.status, "Copied to clipboard!");

        app.expire_status(start + Duration::from_millis(2999));
        assert_eq!(app.status, "Copied to clipboard!");

        app.expire_status(start + Duration::from_secs(3));
        assert!(app.status.is_empty());
    }

    #[test]
    fn test_plain_status_does_not_expire() {
        let mut app = test_app(Box::new(MemoryClipboard::new()));
        let start = Instant::now();
        app.set_status("Ready");
        app.expire_status(start + Duration::from_secs(60));
        assert_eq!(app.status, "Ready");
    }

    #[test]
    fn test_clipboard_failures_are_reported() {
        let mut app = test_app(Box::new(BrokenClipboard));
        let now = Instant::now();
        app.result = "abc".to_string();

        app.copy_to_clipboard(now);
        assert!(app.status_is_error);
        assert_eq!(app.status, "Failed to copy: clipboard command failed: no display");

        app.paste_from_clipboard(now);
        assert!(app.status.starts_with("Failed to read clipboard contents:"));
        // Errors stay until replaced
        app.expire_status(now + Duration::from_secs(10));
        assert!(!app.status.is_empty());
    }

    #[test]
    fn test_paste_from_empty_session_clipboard() {
        let mut app = test_app(Box::new(MemoryClipboard::new()));
        app.paste_from_clipboard(Instant::now());
        assert_eq!(
            app.status,
            "Failed to read clipboard contents: clipboard is empty"
        );
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_control_selection_bounds() {
        let mut app = test_app(Box::new(MemoryClipboard::new()));
        app.select_previous_control();
        assert_eq!(app.selected_control(), Some(Control::Encrypt));
        for _ in 0..10 {
            app.select_next_control();
        }
        assert_eq!(app.selected_control(), Some(Control::Paste));
    }

    #[test]
    fn test_pane_cycle() {
        let mut app = test_app(Box::new(MemoryClipboard::new()));
        assert_eq!(app.focused_pane, Pane::Input);
        app.cycle_pane_forward();
        assert_eq!(app.focused_pane, Pane::Controls);
        app.cycle_pane_backward();
        app.cycle_pane_backward();
        assert_eq!(app.focused_pane, Pane::Output);
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(Control::from_shortcut('e'), Some(Control::Encrypt));
        assert_eq!(Control::from_shortcut('p'), Some(Control::Paste));
        assert_eq!(Control::from_shortcut('x'), None);
    }

    #[test]
    fn test_new_from_builtin_config() {
        let app = App::new(&CipherConfig::builtin()).unwrap();
        assert_eq!(app.config_source, "built-in key set");
        assert!(app.status.is_empty());
    }
}
