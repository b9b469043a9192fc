// EnDeCript Cipher Engine
// Per-character substitution + swap, indexed by position
//
// Encryption of the char at position i:
//   1. substitution table (i % 2): source -> target, unmatched passes through
//   2. swap table (i % 3): exchange with pair partner, unmatched passes through
// Decryption runs the swap first, then the substitution in reverse.
//
// The engine is case-sensitive. Frontends lower-case input before calling it
// because the built-in key set only covers lowercase letters and digits.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::tables::{CipherTables, SUBSTITUTION_TABLES, SWAP_TABLES};

/// Table indices used for the char at `position`
pub fn positional_indices(position: usize) -> (usize, usize) {
    (position % SUBSTITUTION_TABLES, position % SWAP_TABLES)
}

/// Direction of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "encrypt" | "enc" | "e" => Ok(Mode::Encrypt),
            "decrypt" | "dec" | "d" => Ok(Mode::Decrypt),
            other => Err(format!("unknown mode '{}'", other)),
        }
    }
}

/// Stateless encoder/decoder over a shared, immutable key set
///
/// Cloning is cheap and clones share the same tables, so one `Cipher`
/// can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Cipher {
    tables: Arc<CipherTables>,
}

impl Cipher {
    /// Create a cipher that owns its tables
    pub fn new(tables: CipherTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Create a cipher over tables that are already shared
    pub fn from_shared(tables: Arc<CipherTables>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &CipherTables {
        &self.tables
    }

    /// Encrypt one char
    ///
    /// # Panics
    /// Panics if `substitution_index >= 2` or `swap_index >= 3`.
    pub fn encrypt_char(&self, c: char, substitution_index: usize, swap_index: usize) -> char {
        let c = self
            .tables
            .substitution(substitution_index)
            .forward(c)
            .unwrap_or(c);
        self.tables.swap(swap_index).swap(c).unwrap_or(c)
    }

    /// Decrypt one char, undoing [`encrypt_char`](Self::encrypt_char)
    ///
    /// # Panics
    /// Panics if `substitution_index >= 2` or `swap_index >= 3`.
    pub fn decrypt_char(&self, c: char, substitution_index: usize, swap_index: usize) -> char {
        let c = self.tables.swap(swap_index).swap(c).unwrap_or(c);
        self.tables
            .substitution(substitution_index)
            .reverse(c)
            .unwrap_or(c)
    }

    /// Encrypt a whole string; chars outside the key set are kept as-is
    pub fn encrypt(&self, text: &str) -> String {
        self.apply(Mode::Encrypt, text)
    }

    /// Decrypt a whole string produced by [`encrypt`](Self::encrypt)
    pub fn decrypt(&self, text: &str) -> String {
        self.apply(Mode::Decrypt, text)
    }

    /// Transform `text` in the given direction
    pub fn apply(&self, mode: Mode, text: &str) -> String {
        log::trace!("{} {} chars", mode, text.chars().count());

        text.chars()
            .enumerate()
            .map(|(position, c)| {
                let (sub, swap) = positional_indices(position);
                match mode {
                    Mode::Encrypt => self.encrypt_char(c, sub, swap),
                    Mode::Decrypt => self.decrypt_char(c, sub, swap),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::tables::TableSpec;
    use crate::table::{PairTable, SubstitutionTable, SwapTable};

    // substitution[0] maps a->m, swap[0] pairs m<->q
    fn scenario_cipher() -> Cipher {
        let tables = CipherTables::build_validated(
            &[TableSpec::new("abmn", "mnab"), TableSpec::new("abxy", "xyab")],
            &[
                TableSpec::new("m", "q"),
                TableSpec::new("n", "r"),
                TableSpec::new("x", "z"),
            ],
        )
        .unwrap();
        Cipher::new(tables)
    }

    // Each table tags its output so the chosen indices are visible
    fn tagging_cipher() -> Cipher {
        let tables = CipherTables::build(
            &[TableSpec::new("a", "0"), TableSpec::new("a", "1")],
            &[
                TableSpec::new("0", "A"),
                TableSpec::new("0", "B"),
                TableSpec::new("0", "C"),
            ],
        )
        .unwrap();
        Cipher::new(tables)
    }

    #[test]
    fn test_encrypt_char_scenario() {
        let cipher = scenario_cipher();
        assert_eq!(cipher.encrypt_char('a', 0, 0), 'q');
    }

    #[test]
    fn test_decrypt_char_scenario() {
        let cipher = scenario_cipher();
        assert_eq!(cipher.decrypt_char('q', 0, 0), 'a');
    }

    #[test]
    fn test_unmapped_char_passes_through() {
        let cipher = scenario_cipher();
        for sub in 0..SUBSTITUTION_TABLES {
            for swap in 0..SWAP_TABLES {
                assert_eq!(cipher.encrypt_char('#', sub, swap), '#');
                assert_eq!(cipher.decrypt_char('#', sub, swap), '#');
            }
        }
    }

    #[test]
    fn test_substitution_miss_still_swaps() {
        let cipher = scenario_cipher();
        // 'q' is not a substitution source, but swap[0] still applies
        assert_eq!(cipher.encrypt_char('q', 0, 0), 'm');
        assert_eq!(cipher.decrypt_char('m', 0, 0), 'q');
    }

    #[test]
    fn test_empty_input() {
        let cipher = scenario_cipher();
        assert_eq!(cipher.encrypt(""), "");
        assert_eq!(cipher.decrypt(""), "");
    }

    #[test]
    fn test_positional_indices() {
        assert_eq!(positional_indices(0), (0, 0));
        assert_eq!(positional_indices(1), (1, 1));
        assert_eq!(positional_indices(2), (0, 2));
        assert_eq!(positional_indices(3), (1, 0));
        assert_eq!(positional_indices(4), (0, 1));
        assert_eq!(positional_indices(5), (1, 2));
        assert_eq!(positional_indices(6), (0, 0));
    }

    #[test]
    fn test_index_cycling() {
        let cipher = tagging_cipher();
        // Position i -> substitution i % 2 (a -> 0 or 1), then swap i % 3.
        // Only '0' is swapped, into A/B/C by swap table.
        assert_eq!(cipher.encrypt("aaaaaa"), "A1C1B1");
        assert_eq!(cipher.decrypt("A1C1B1"), "aaaaaa");
    }

    #[test]
    fn test_first_match_wins() {
        let sub = SubstitutionTable::new(PairTable::from_pairs(
            "substitution[0]",
            vec![('a', 'x'), ('a', 'y')],
        ));
        let identity = SubstitutionTable::new(PairTable::from_pairs("substitution[1]", vec![]));
        let swap = SwapTable::new(PairTable::from_pairs(
            "swap[0]",
            vec![('x', '1'), ('x', '2')],
        ));
        let empty_swap = || SwapTable::new(PairTable::from_pairs("swap", vec![]));
        let cipher = Cipher::new(CipherTables::from_tables(
            [sub, identity],
            [swap, empty_swap(), empty_swap()],
        ));

        assert_eq!(cipher.encrypt_char('a', 0, 0), '1');
        assert_eq!(cipher.encrypt_char('a', 0, 1), 'x');
        assert_eq!(cipher.decrypt_char('1', 0, 0), 'a');
    }

    #[test]
    fn test_round_trip() {
        let cipher = scenario_cipher();
        for text in ["", "a", "ab", "abba baba", "mnqrxyz", "no mapping here!"] {
            assert_eq!(cipher.decrypt(&cipher.encrypt(text)), text);
        }
    }

    #[test]
    fn test_case_sensitive() {
        let cipher = scenario_cipher();
        assert_eq!(cipher.encrypt_char('A', 0, 0), 'A');
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("encrypt".parse::<Mode>(), Ok(Mode::Encrypt));
        assert_eq!("D".parse::<Mode>(), Ok(Mode::Decrypt));
        assert!("rot13".parse::<Mode>().is_err());
        assert_eq!(Mode::Decrypt.to_string(), "decrypt");
        assert_eq!(Mode::default(), Mode::Encrypt);
    }

    #[test]
    fn test_apply_matches_direction_helpers() {
        let cipher = scenario_cipher();
        assert_eq!(cipher.apply(Mode::Encrypt, "abab"), cipher.encrypt("abab"));
        assert_eq!(cipher.apply(Mode::Decrypt, "qyrx"), cipher.decrypt("qyrx"));
    }

    #[test]
    fn test_shared_across_threads() {
        let cipher = scenario_cipher();
        let expected = cipher.encrypt("abba");

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cipher = cipher.clone();
                std::thread::spawn(move || cipher.encrypt("abba"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
