// EnDeCript Cipher Tables
// The immutable key set: 2 substitution tables and 3 swap tables

use crate::table::{ConfigurationError, PairTable, SubstitutionTable, SwapTable};

/// Number of substitution tables (selected by position % 2)
pub const SUBSTITUTION_TABLES: usize = 2;

/// Number of swap tables (selected by position % 3)
pub const SWAP_TABLES: usize = 3;

/// Source strings for one table: `source[i]` pairs with `target[i]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub source: String,
    pub target: String,
}

impl TableSpec {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// All tables the cipher reads, built once before any transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherTables {
    substitution: [SubstitutionTable; SUBSTITUTION_TABLES],
    swap: [SwapTable; SWAP_TABLES],
}

impl CipherTables {
    /// Build from string pairs, checking only lengths and table counts
    ///
    /// Reversibility is not checked here; call [`validate`](Self::validate)
    /// for that.
    pub fn build(substitutions: &[TableSpec], swaps: &[TableSpec]) -> Result<Self, ConfigurationError> {
        let substitution: [SubstitutionTable; SUBSTITUTION_TABLES] =
            build_tables(substitutions, "substitution", |name, spec| {
                PairTable::build(name, &spec.source, &spec.target).map(SubstitutionTable::new)
            })?;
        let swap: [SwapTable; SWAP_TABLES] = build_tables(swaps, "swap", |name, spec| {
            PairTable::build(name, &spec.source, &spec.target).map(SwapTable::new)
        })?;

        log::debug!(
            "built cipher tables: substitution={:?} swap={:?}",
            substitution.iter().map(|t| t.table().len()).collect::<Vec<_>>(),
            swap.iter().map(|t| t.table().len()).collect::<Vec<_>>()
        );

        Ok(Self { substitution, swap })
    }

    /// Build and reject any key set that decryption could not invert
    pub fn build_validated(
        substitutions: &[TableSpec],
        swaps: &[TableSpec],
    ) -> Result<Self, ConfigurationError> {
        let tables = Self::build(substitutions, swaps)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Assemble from tables that were already built
    pub fn from_tables(
        substitution: [SubstitutionTable; SUBSTITUTION_TABLES],
        swap: [SwapTable; SWAP_TABLES],
    ) -> Self {
        Self { substitution, swap }
    }

    /// Report the first table that breaks `decrypt(encrypt(s)) == s`
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for table in &self.substitution {
            table.validate()?;
        }
        for table in &self.swap {
            table.validate()?;
        }
        Ok(())
    }

    /// Get a substitution table
    ///
    /// # Panics
    /// Panics if `index >= SUBSTITUTION_TABLES`.
    pub fn substitution(&self, index: usize) -> &SubstitutionTable {
        &self.substitution[index]
    }

    /// Get a swap table
    ///
    /// # Panics
    /// Panics if `index >= SWAP_TABLES`.
    pub fn swap(&self, index: usize) -> &SwapTable {
        &self.swap[index]
    }

    pub fn substitution_tables(&self) -> &[SubstitutionTable] {
        &self.substitution
    }

    pub fn swap_tables(&self) -> &[SwapTable] {
        &self.swap
    }
}

fn build_tables<T, const N: usize>(
    specs: &[TableSpec],
    kind: &'static str,
    build: impl Fn(String, &TableSpec) -> Result<T, ConfigurationError>,
) -> Result<[T; N], ConfigurationError> {
    if specs.len() != N {
        return Err(ConfigurationError::TableCount {
            kind,
            expected: N,
            found: specs.len(),
        });
    }

    let built = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| build(format!("{}[{}]", kind, i), spec))
        .collect::<Result<Vec<T>, _>>()?;

    built.try_into().map_err(|v: Vec<T>| ConfigurationError::TableCount {
        kind,
        expected: N,
        found: v.len(),
    })
}
