//! Dependency feature table
//!
//! Characterizes each head word by the set of (relation, modifier lemma)
//! pairs it participates in, grouped by the head's part-of-speech class.
//! Feature sets deduplicate by identity: seeing the same feature twice
//! for the same word stores it once.

pub mod aggregator;

use crate::types::PosTag;
use rustc_hash::{FxHashMap, FxHashSet};

/// One distributional feature of a head word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feature {
    /// Dependency relation label
    pub relation: String,
    /// Lemma of the dependent word
    pub lemma: String,
}

impl Feature {
    /// Create a new feature pair
    pub fn new(relation: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            lemma: lemma.into(),
        }
    }
}

/// Set of features belonging to one word
pub type FeatureSet = FxHashSet<Feature>;

/// Features of every word within one part-of-speech class
///
/// Iteration order is unspecified; callers must not depend on it.
pub type ClassFeatures = FxHashMap<String, FeatureSet>;

/// Feature sets for all words, partitioned by part-of-speech class
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureTable {
    by_pos: FxHashMap<PosTag, ClassFeatures>,
}

impl FeatureTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a feature for a word of the given class
    pub fn insert(&mut self, pos: PosTag, word: impl Into<String>, feature: Feature) {
        self.by_pos
            .entry(pos)
            .or_default()
            .entry(word.into())
            .or_default()
            .insert(feature);
    }

    /// The word-to-features map for one class, if any word was recorded
    pub fn class(&self, pos: PosTag) -> Option<&ClassFeatures> {
        self.by_pos.get(&pos)
    }

    /// Iterate over all (class, word-to-features) entries
    pub fn classes(&self) -> impl Iterator<Item = (PosTag, &ClassFeatures)> {
        self.by_pos.iter().map(|(&pos, words)| (pos, words))
    }

    /// Number of part-of-speech classes with at least one word
    pub fn num_classes(&self) -> usize {
        self.by_pos.len()
    }

    /// Whether no features were recorded at all
    pub fn is_empty(&self) -> bool {
        self.by_pos.is_empty()
    }
}
