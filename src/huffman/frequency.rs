use std::collections::BTreeMap;

use crate::error::{HuffError, Result};

use super::Symbol;

/// Occurrence count per distinct symbol, ordered by code point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, u64>,
}

impl FrequencyTable {
    pub fn from_symbols(symbols: &[Symbol]) -> Self {
        let mut counts = BTreeMap::new();
        for &symbol in symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Builds a table from persisted entries. Counts must be positive, symbols
    /// unique, and the total must fit in a u64.
    pub fn try_from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Symbol, u64)>,
    {
        let mut counts = BTreeMap::new();
        let mut total = 0u64;
        for (symbol, count) in entries {
            if count == 0 {
                return Err(HuffError::malformed(format!(
                    "symbol {symbol:#06X} has a zero count"
                )));
            }
            if counts.insert(symbol, count).is_some() {
                return Err(HuffError::malformed(format!(
                    "symbol {symbol:#06X} appears twice"
                )));
            }
            total = total
                .checked_add(count)
                .ok_or_else(|| HuffError::malformed("symbol counts overflow"))?;
        }

        Ok(Self { counts })
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(text: &str) -> Vec<Symbol> {
        text.encode_utf16().collect()
    }

    #[test]
    fn test_from_symbols() {
        let table = FrequencyTable::from_symbols(&symbols("abracadabra"));
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![(0x61, 5), (0x62, 2), (0x63, 1), (0x64, 1), (0x72, 2)]
        );
        assert_eq!(table.total(), 11);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_empty() {
        let table = FrequencyTable::from_symbols(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_entries_any_order() {
        let a = FrequencyTable::try_from_entries([(3, 1), (1, 4), (2, 2)]).unwrap();
        let b = FrequencyTable::try_from_entries([(2, 2), (3, 1), (1, 4)]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_entries_rejected() {
        let zero = FrequencyTable::try_from_entries([(1, 3), (2, 0)]);
        assert!(matches!(zero, Err(HuffError::MalformedArtifact(_))));

        let duplicate = FrequencyTable::try_from_entries([(1, 3), (1, 2)]);
        assert!(matches!(duplicate, Err(HuffError::MalformedArtifact(_))));

        let overflow = FrequencyTable::try_from_entries([(1, u64::MAX), (2, 1)]);
        assert!(matches!(overflow, Err(HuffError::MalformedArtifact(_))));
    }
}
