//! Per-photo reaction counts.

use std::collections::BTreeMap;

use super::symbol::ReactionSymbol;

/// Reaction counts for a single photo.
///
/// A symbol with no entry has a count of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionAggregate {
    counts: BTreeMap<ReactionSymbol, u64>,
}

impl ReactionAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `symbol`, zero if never recorded.
    pub fn count(&self, symbol: ReactionSymbol) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Add one to `symbol` and return the new count.
    pub fn increment(&mut self, symbol: ReactionSymbol) -> u64 {
        let count = self.counts.entry(symbol).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Total across all symbols.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

impl FromIterator<(ReactionSymbol, u64)> for ReactionAggregate {
    fn from_iter<I: IntoIterator<Item = (ReactionSymbol, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
