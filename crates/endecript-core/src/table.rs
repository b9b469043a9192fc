// EnDeCript Pair Tables
// Ordered (char, char) tables built by zipping two strings

use std::fmt;

/// Errors raised while building cipher tables
///
/// All of these are fatal to initialization: a cipher is never built from
/// a partially valid key set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("table '{table}': source has {source_len} chars but target has {target_len}")]
    LengthMismatch {
        table: String,
        source_len: usize,
        target_len: usize,
    },

    #[error("expected {expected} {kind} tables, found {found}")]
    TableCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("table '{table}': source char {ch:?} appears more than once")]
    DuplicateSource { table: String, ch: char },

    #[error("table '{table}': target char {ch:?} appears more than once")]
    DuplicateTarget { table: String, ch: char },

    #[error("table '{table}': target char {ch:?} is not a source char, decryption would not invert it")]
    UnmappedTarget { table: String, ch: char },

    #[error("table '{table}': char {ch:?} is swapped with itself")]
    SelfSwap { table: String, ch: char },

    #[error("table '{table}': char {ch:?} appears in more than one swap pair")]
    RepeatedSwap { table: String, ch: char },
}

/// Zip two strings into (source, target) pairs, position by position
///
/// Lengths are compared in chars. Two empty strings give an empty table.
pub fn build_pair_table(source: &str, target: &str) -> Result<Vec<(char, char)>, ConfigurationError> {
    build_named(source, target, "unnamed")
}

fn build_named(source: &str, target: &str, name: &str) -> Result<Vec<(char, char)>, ConfigurationError> {
    let source_len = source.chars().count();
    let target_len = target.chars().count();
    if source_len != target_len {
        return Err(ConfigurationError::LengthMismatch {
            table: name.to_string(),
            source_len,
            target_len,
        });
    }
    Ok(source.chars().zip(target.chars()).collect())
}

/// Named, ordered list of char pairs
///
/// Lookups are linear scans that stop at the first qualifying pair, so
/// declaration order decides which of two duplicate entries wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable {
    name: String,
    pairs: Vec<(char, char)>,
}

impl PairTable {
    /// Build a table from two equal-length strings
    pub fn build(
        name: impl Into<String>,
        source: &str,
        target: &str,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        let pairs = build_named(source, target, &name)?;
        Ok(Self { name, pairs })
    }

    /// Wrap already-zipped pairs
    pub fn from_pairs(name: impl Into<String>, pairs: Vec<(char, char)>) -> Self {
        Self {
            name: name.into(),
            pairs,
        }
    }

    /// Get the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the pairs in declaration order
    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// First pair whose first element is `c`
    pub fn first_by_left(&self, c: char) -> Option<(char, char)> {
        self.pairs.iter().copied().find(|&(left, _)| left == c)
    }

    /// First pair whose second element is `c`
    pub fn first_by_right(&self, c: char) -> Option<(char, char)> {
        self.pairs.iter().copied().find(|&(_, right)| right == c)
    }
}

impl fmt::Display for PairTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} pairs)", self.name, self.pairs.len())
    }
}

/// Directional substitution: source char -> target char
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    table: PairTable,
}

impl SubstitutionTable {
    pub fn new(table: PairTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PairTable {
        &self.table
    }

    /// Replacement for `c` when it is a source char
    pub fn forward(&self, c: char) -> Option<char> {
        self.table.first_by_left(c).map(|(_, target)| target)
    }

    /// Original for `c` when it is a target char
    pub fn reverse(&self, c: char) -> Option<char> {
        self.table.first_by_right(c).map(|(source, _)| source)
    }

    /// Check that `reverse` undoes `forward` for every char
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let name = self.table.name();
        let pairs = self.table.pairs();

        for (i, &(source, target)) in pairs.iter().enumerate() {
            if pairs[..i].iter().any(|&(s, _)| s == source) {
                return Err(ConfigurationError::DuplicateSource {
                    table: name.to_string(),
                    ch: source,
                });
            }
            if pairs[..i].iter().any(|&(_, t)| t == target) {
                return Err(ConfigurationError::DuplicateTarget {
                    table: name.to_string(),
                    ch: target,
                });
            }
        }

        // A target outside the source set passes through encryption
        // untouched but gets rewritten by decryption.
        for &(source, target) in pairs {
            if source != target && self.table.first_by_left(target).is_none() {
                return Err(ConfigurationError::UnmappedTarget {
                    table: name.to_string(),
                    ch: target,
                });
            }
        }

        Ok(())
    }
}

/// Bidirectional swap: each pair exchanges its two chars
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapTable {
    table: PairTable,
}

impl SwapTable {
    pub fn new(table: PairTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PairTable {
        &self.table
    }

    /// Partner of `c` in the first pair that contains it
    pub fn swap(&self, c: char) -> Option<char> {
        self.table.pairs().iter().find_map(|&(a, b)| {
            if c == a {
                Some(b)
            } else if c == b {
                Some(a)
            } else {
                None
            }
        })
    }

    /// Check that swapping is an involution
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let name = self.table.name();
        let mut seen: Vec<char> = Vec::with_capacity(self.table.len() * 2);

        for &(a, b) in self.table.pairs() {
            if a == b {
                return Err(ConfigurationError::SelfSwap {
                    table: name.to_string(),
                    ch: a,
                });
            }
            for ch in [a, b] {
                if seen.contains(&ch) {
                    return Err(ConfigurationError::RepeatedSwap {
                        table: name.to_string(),
                        ch,
                    });
                }
                seen.push(ch);
            }
        }

        Ok(())
    }
}
