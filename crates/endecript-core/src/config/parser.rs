// EnDeCript Config Parser - TOML with Serde
// Parses the key set and frontend options from TOML files

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

use super::builtin::{
    builtin_substitution_specs, builtin_swap_specs, BUILTIN_ALPHABET, BUILTIN_SUBSTITUTIONS,
    BUILTIN_SWAPS,
};
use crate::cipher::{Cipher, CipherTables, TableSpec};
use crate::table::ConfigurationError;

/// Default lifetime of transient status messages
pub const DEFAULT_STATUS_TIMEOUT_MS: u64 = 3000;

fn config_debug_enabled() -> bool {
    static DEBUG_CONFIG: OnceLock<bool> = OnceLock::new();
    *DEBUG_CONFIG.get_or_init(|| {
        std::env::var("ENDECRIPT_DEBUG_CONFIG")
            .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes" | "on"))
            .unwrap_or(false)
    })
}

/// Configuration parser errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("substitution[{0}] has no source and [general].alphabet is not set")]
    MissingSource(usize),

    #[error("Invalid key set: {0}")]
    Table(#[from] ConfigurationError),
}

/// Root TOML table
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigToml {
    #[serde(default)]
    pub general: Option<GeneralConfig>,

    /// Substitution tables (exactly 2 when present)
    #[serde(default)]
    pub substitution: Vec<SubstitutionTomlEntry>,

    /// Swap tables (exactly 3 when present)
    #[serde(default)]
    pub swap: Vec<SwapTomlEntry>,

    #[serde(default)]
    pub clipboard: Option<ClipboardConfig>,
}

/// General settings
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Default source string for substitution tables
    pub alphabet: Option<String>,
    /// Lower-case input before transforming (default true)
    pub lowercase_input: Option<bool>,
    /// Reject key sets that decryption cannot invert (default true)
    pub strict: Option<bool>,
    /// Transient status lifetime in milliseconds
    pub status_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubstitutionTomlEntry {
    pub source: Option<String>,
    pub target: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwapTomlEntry {
    pub left: String,
    pub right: String,
}

/// External clipboard commands (argv form)
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClipboardConfig {
    /// Command that reads the text to copy from stdin
    pub copy_command: Option<Vec<String>>,
    /// Command that prints the clipboard contents to stdout
    pub paste_command: Option<Vec<String>>,
}

/// Loaded configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherConfig {
    pub substitutions: Vec<TableSpec>,
    pub swaps: Vec<TableSpec>,
    pub lowercase_input: bool,
    pub strict: bool,
    pub status_timeout_ms: u64,
    pub clipboard: ClipboardConfig,
    /// File the config was read from (None for built-in)
    pub source_path: Option<PathBuf>,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            substitutions: builtin_substitution_specs(),
            swaps: builtin_swap_specs(),
            lowercase_input: true,
            strict: true,
            status_timeout_ms: DEFAULT_STATUS_TIMEOUT_MS,
            clipboard: ClipboardConfig::default(),
            source_path: None,
        }
    }
}

impl CipherConfig {
    /// The built-in key set with default options
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Parse a TOML configuration file
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path)?;
        let mut config = Self::from_toml(&content)?;
        config.source_path = Some(path.as_ref().to_path_buf());
        log::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let toml_config: ConfigToml =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;
        toml_config.to_config()
    }

    /// Get the default config path (~/.config/endecript/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("endecript").join("config.toml"))
    }

    /// Load from the default location, falling back to the built-in key set
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_toml_path(path);
            }
        }
        log::debug!("no config file found, using built-in key set");
        Ok(Self::builtin())
    }

    /// Load `path` if given, otherwise the default location
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_toml_path(path),
            None => Self::load_default(),
        }
    }

    /// Build the tables; validated unless `strict` is off
    pub fn build_tables(&self) -> Result<CipherTables, ConfigError> {
        let tables = if self.strict {
            CipherTables::build_validated(&self.substitutions, &self.swaps)?
        } else {
            let tables = CipherTables::build(&self.substitutions, &self.swaps)?;
            if let Err(e) = tables.validate() {
                log::warn!("key set may not decrypt cleanly: {}", e);
            }
            tables
        };

        if config_debug_enabled() {
            for table in tables.substitution_tables() {
                log::trace!("{} pairs={:?}", table.table(), table.table().pairs());
            }
            for table in tables.swap_tables() {
                log::trace!("{} pairs={:?}", table.table(), table.table().pairs());
            }
        }

        Ok(tables)
    }

    /// Build a cipher from this configuration
    pub fn cipher(&self) -> Result<Cipher, ConfigError> {
        self.build_tables().map(Cipher::new)
    }
}

impl ConfigToml {
    fn to_config(&self) -> Result<CipherConfig, ConfigError> {
        let mut config = CipherConfig::default();
        let general = self.general.clone().unwrap_or_default();

        if let Some(lowercase) = general.lowercase_input {
            config.lowercase_input = lowercase;
        }
        if let Some(strict) = general.strict {
            config.strict = strict;
        }
        if let Some(timeout) = general.status_timeout_ms {
            config.status_timeout_ms = timeout;
        }
        if let Some(clipboard) = &self.clipboard {
            config.clipboard = clipboard.clone();
        }

        // A file with no tables at all keeps the built-in key set
        if self.substitution.is_empty() && self.swap.is_empty() {
            log::debug!("config defines no tables, keeping built-in key set");
            return Ok(config);
        }

        config.substitutions = self
            .substitution
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let source = entry
                    .source
                    .clone()
                    .or_else(|| general.alphabet.clone())
                    .ok_or(ConfigError::MissingSource(i))?;
                Ok(TableSpec::new(source, entry.target.clone()))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        config.swaps = self
            .swap
            .iter()
            .map(|entry| TableSpec::new(entry.left.clone(), entry.right.clone()))
            .collect();

        Ok(config)
    }
}

/// TOML for the built-in key set, suitable as a starting config file
pub fn default_config_content() -> String {
    let mut out = String::from(
        "# EnDeCript configuration\n\
         # Place this file at: ~/.config/endecript/config.toml\n\
         \n\
         [general]\n",
    );
    out.push_str(&format!("alphabet = \"{}\"\n", BUILTIN_ALPHABET));
    out.push_str("lowercase_input = true\n");
    out.push_str("strict = true\n");
    out.push_str(&format!("status_timeout_ms = {}\n", DEFAULT_STATUS_TIMEOUT_MS));

    out.push_str("\n# Substitution tables, used at even (0) and odd (1) positions\n");
    for target in BUILTIN_SUBSTITUTIONS {
        out.push_str(&format!("[[substitution]]\ntarget = \"{}\"\n\n", target));
    }

    out.push_str("# Swap tables, used at positions 0, 1, 2 modulo 3\n");
    for (left, right) in BUILTIN_SWAPS {
        out.push_str(&format!("[[swap]]\nleft = \"{}\"\nright = \"{}\"\n\n", left, right));
    }

    out.push_str(
        "[clipboard]\n\
         # copy_command = [\"wl-copy\"]\n\
         # paste_command = [\"wl-paste\", \"--no-newline\"]\n",
    );
    out
}
