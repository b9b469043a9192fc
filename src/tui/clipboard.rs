// Clipboard Provider Trait
//
// The controller only needs "write text" and "read text". Providers:
// - MemoryClipboard: a register shared within this process
// - CommandClipboard: pipes through external tools (wl-copy, xclip, ...)

use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Arc;

use endecript_core::ClipboardConfig;
use parking_lot::Mutex;

/// Error type for clipboard operations
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardError {
    /// Nothing has been copied yet
    Empty,

    /// The external command could not be started
    SpawnFailed(String),

    /// The external command ran but reported failure
    CommandFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Empty => write!(f, "clipboard is empty"),
            ClipboardError::SpawnFailed(msg) => write!(f, "could not start clipboard command: {}", msg),
            ClipboardError::CommandFailed(msg) => write!(f, "clipboard command failed: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Something that can hold text for copy/paste
pub trait ClipboardProvider {
    /// Short name shown in the header
    fn name(&self) -> &str;

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    fn get_text(&mut self) -> Result<String, ClipboardError>;
}

/// In-process clipboard; clones share the same register
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn name(&self) -> &str {
        "session"
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.contents.lock().clone().ok_or(ClipboardError::Empty)
    }
}

/// Clipboard backed by external copy/paste commands (argv form)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    copy_command: Vec<String>,
    paste_command: Vec<String>,
}

impl CommandClipboard {
    /// Returns None if either command is empty
    pub fn new(copy_command: Vec<String>, paste_command: Vec<String>) -> Option<Self> {
        if copy_command.is_empty() || paste_command.is_empty() {
            return None;
        }
        Some(Self {
            copy_command,
            paste_command,
        })
    }

    pub fn copy_command(&self) -> &[String] {
        &self.copy_command
    }

    pub fn paste_command(&self) -> &[String] {
        &self.paste_command
    }
}

impl ClipboardProvider for CommandClipboard {
    fn name(&self) -> &str {
        &self.copy_command[0]
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.copy_command[0])
            .args(&self.copy_command[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ClipboardError::SpawnFailed(format!("{}: {}", self.copy_command[0], e)))?;

        // Close stdin before waiting so the child sees EOF, and always reap it
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let output = child
            .wait_with_output()
            .map_err(|e| ClipboardError::CommandFailed(e.to_string()))?;
        written.map_err(|e| ClipboardError::CommandFailed(e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ))
        }
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        let output = Command::new(&self.paste_command[0])
            .args(&self.paste_command[1..])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ClipboardError::SpawnFailed(format!("{}: {}", self.paste_command[0], e)))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(ClipboardError::CommandFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ))
        }
    }
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

/// Default (copy, paste) commands for the running display server
pub fn detect_commands(wayland: bool, x11: bool) -> Option<(Vec<String>, Vec<String>)> {
    if wayland {
        Some((argv(&["wl-copy"]), argv(&["wl-paste", "--no-newline"])))
    } else if x11 {
        Some((
            argv(&["xclip", "-selection", "clipboard"]),
            argv(&["xclip", "-selection", "clipboard", "-out"]),
        ))
    } else {
        None
    }
}

/// Pick a provider: configured commands, then the display server's tools,
/// then the in-process register
pub fn from_config(config: &ClipboardConfig) -> Box<dyn ClipboardProvider> {
    let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
    let x11 = std::env::var_os("DISPLAY").is_some();
    resolve(config, detect_commands(wayland, x11))
}

fn resolve(
    config: &ClipboardConfig,
    detected: Option<(Vec<String>, Vec<String>)>,
) -> Box<dyn ClipboardProvider> {
    let (detected_copy, detected_paste) = match detected {
        Some((copy, paste)) => (Some(copy), Some(paste)),
        None => (None, None),
    };

    let copy = config.copy_command.clone().or(detected_copy);
    let paste = config.paste_command.clone().or(detected_paste);

    match (copy, paste) {
        (Some(copy), Some(paste)) => match CommandClipboard::new(copy, paste) {
            Some(clipboard) => {
                log::debug!("using clipboard commands via {}", clipboard.name());
                Box::new(clipboard)
            }
            None => {
                log::warn!("empty clipboard command configured, using session clipboard");
                Box::new(MemoryClipboard::new())
            }
        },
        _ => {
            log::debug!("no clipboard commands available, using session clipboard");
            Box::new(MemoryClipboard::new())
        }
    }
}
