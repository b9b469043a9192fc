// EnDeCript Core Library
// Fixed-table substitution cipher: two lookup passes per character
//
// This is a reversible obfuscation, not a secure cipher.

pub mod cipher;
pub mod config;
pub mod table;

pub use cipher::{
    positional_indices, Cipher, CipherTables, Mode, TableSpec, SUBSTITUTION_TABLES, SWAP_TABLES,
};
pub use config::{builtin_cipher, builtin_tables};
pub use table::{build_pair_table, ConfigurationError, PairTable, SubstitutionTable, SwapTable};

#[cfg(feature = "config-file")]
pub use config::{default_config_content, CipherConfig, ClipboardConfig, ConfigError};
