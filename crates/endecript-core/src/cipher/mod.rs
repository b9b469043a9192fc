// EnDeCript Cipher Module
// Key set construction and the position-indexed transform

pub mod engine;
pub mod tables;

pub use engine::{positional_indices, Cipher, Mode};
pub use tables::{CipherTables, TableSpec, SUBSTITUTION_TABLES, SWAP_TABLES};
