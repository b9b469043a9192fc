// EnDeCript Built-in Key Set
// Used when no config file is present

use crate::cipher::{Cipher, CipherTables, TableSpec};
use crate::table::ConfigurationError;

/// Source alphabet shared by both built-in substitution tables
pub const BUILTIN_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Targets for substitution[0] and substitution[1] (permutations of the alphabet)
pub const BUILTIN_SUBSTITUTIONS: [&str; 2] = [
    "1m3fzt7vpb8d05gqcky69ojrx2elawis4nhu",
    "5a93xhnl6ote2r1dpk7jwc4i0szfvm8bugqy",
];

/// (left, right) strings for swap[0..3]; every alphabet char is in exactly one pair
pub const BUILTIN_SWAPS: [(&str, &str); 3] = [
    ("37yrdvbf1lig5nqw2c", "ztm0ke6a4hsop8xj9u"),
    ("vioe7gyn2w5ltzd06k", "s4q9hx8rcaj1fupb3m"),
    ("n14buqxjzd3w60fgk2", "hpecymiavts95ol8r7"),
];

pub fn builtin_substitution_specs() -> Vec<TableSpec> {
    BUILTIN_SUBSTITUTIONS
        .iter()
        .map(|target| TableSpec::new(BUILTIN_ALPHABET, *target))
        .collect()
}

pub fn builtin_swap_specs() -> Vec<TableSpec> {
    BUILTIN_SWAPS
        .iter()
        .map(|(left, right)| TableSpec::new(*left, *right))
        .collect()
}

/// Build the built-in tables, validated
pub fn builtin_tables() -> Result<CipherTables, ConfigurationError> {
    CipherTables::build_validated(&builtin_substitution_specs(), &builtin_swap_specs())
}

/// Cipher over the built-in key set
pub fn builtin_cipher() -> Result<Cipher, ConfigurationError> {
    builtin_tables().map(Cipher::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        let tables = builtin_tables().unwrap();
        for table in tables.substitution_tables() {
            assert_eq!(table.table().len(), BUILTIN_ALPHABET.len());
        }
        for table in tables.swap_tables() {
            assert_eq!(table.table().len() * 2, BUILTIN_ALPHABET.len());
        }
    }

    #[test]
    fn test_builtin_swaps_cover_alphabet() {
        for (left, right) in BUILTIN_SWAPS {
            let mut chars: Vec<char> = left.chars().chain(right.chars()).collect();
            chars.sort_unstable();
            let mut alphabet: Vec<char> = BUILTIN_ALPHABET.chars().collect();
            alphabet.sort_unstable();
            assert_eq!(chars, alphabet);
        }
    }

    #[test]
    fn test_builtin_known_vectors() {
        let cipher = builtin_cipher().unwrap();
        assert_eq!(cipher.encrypt("hello world"), "egtvx wlrvt");
        assert_eq!(cipher.decrypt("egtvx wlrvt"), "hello world");
        assert_eq!(
            cipher.encrypt("the quick brown fox 123"),
            "b1v 295eg kroi6 fp0 fea"
        );
        assert_eq!(cipher.encrypt_char('a', 0, 0), '4');
        assert_eq!(cipher.encrypt_char('a', 1, 1), 'j');
    }
}
