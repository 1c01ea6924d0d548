//! Dependency triple frequency table
//!
//! Counts (relation, modifier, head) triples observed in a corpus. The
//! table is keyed by an explicit composite [`Triple`] key, so "absent
//! means zero" is part of the contract rather than an artifact of nested
//! auto-vivifying maps.

pub mod aggregator;

use rustc_hash::FxHashMap;

/// Composite key for one dependency triple
///
/// All three fields are lowercase-normalized lemmas/labels by the time
/// they reach the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Dependency relation label
    pub relation: String,
    /// Lemma of the dependent (modifier) word
    pub modifier: String,
    /// Lemma of the head word
    pub head: String,
}

impl Triple {
    /// Create a new triple key
    pub fn new(
        relation: impl Into<String>,
        modifier: impl Into<String>,
        head: impl Into<String>,
    ) -> Self {
        Self {
            relation: relation.into(),
            modifier: modifier.into(),
            head: head.into(),
        }
    }
}

/// Frequency table over dependency triples
///
/// Built in a single pass by the [`aggregator::TripleAggregator`] and
/// read-only afterwards. Counts are non-negative; a key that was never
/// incremented counts as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripleTable {
    counts: FxHashMap<Triple, u64>,
    total: u64,
}

impl TripleTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for a triple by one
    pub fn increment(&mut self, triple: Triple) {
        *self.counts.entry(triple).or_insert(0) += 1;
        self.total += 1;
    }

    /// Count for one triple; absent entries are zero
    pub fn count(&self, relation: &str, modifier: &str, head: &str) -> u64 {
        self.counts
            .get(&Triple::new(relation, modifier, head))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all counts across the table
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct triples recorded
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table holds no triples
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over all (triple, count) entries
    ///
    /// Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&Triple, u64)> {
        self.counts.iter().map(|(t, &c)| (t, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let table = TripleTable::new();

        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.count("dobj", "coffee", "have"), 0);
    }

    #[test]
    fn test_increment_and_count() {
        let mut table = TripleTable::new();
        table.increment(Triple::new("dobj", "coffee", "have"));
        table.increment(Triple::new("dobj", "coffee", "have"));
        table.increment(Triple::new("nsubj", "coffee", "brew"));

        assert_eq!(table.count("dobj", "coffee", "have"), 2);
        assert_eq!(table.count("nsubj", "coffee", "brew"), 1);
        assert_eq!(table.count("dobj", "tea", "have"), 0);
        assert_eq!(table.total(), 3);
        assert_eq!(table.len(), 2);
    }

}
