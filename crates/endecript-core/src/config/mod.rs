// EnDeCript Config API
// Built-in key set and TOML loading

pub mod builtin;

#[cfg(feature = "config-file")]
pub mod parser;

pub use builtin::{builtin_cipher, builtin_tables, BUILTIN_ALPHABET};

#[cfg(feature = "config-file")]
pub use parser::{
    default_config_content, CipherConfig, ClipboardConfig, ConfigError, DEFAULT_STATUS_TIMEOUT_MS,
};
