//! Per-feature information content with memoization
//!
//! A feature's selectional information content is the negative log
//! probability of a word in the class carrying it. Counting carriers is
//! a scan over the whole class, so values are memoized for the duration
//! of one class's computation. Counts differ between classes — a cache
//! is scoped to exactly one class and never shared.

use crate::features::{ClassFeatures, Feature};
use rustc_hash::FxHashMap;

/// Memoized information-content lookup, scoped to one POS class
#[derive(Debug, Default)]
pub struct InfoCache {
    values: FxHashMap<Feature, f64>,
}

impl InfoCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Information content of one feature:
    /// `-log2(carriers(feature) / total_words)`
    ///
    /// The feature must be carried by at least one word of the class;
    /// a zero-carrier lookup has no finite information content.
    pub fn info(&mut self, class: &ClassFeatures, total_words: usize, feature: &Feature) -> f64 {
        if let Some(&value) = self.values.get(feature) {
            return value;
        }
        let carriers = class.values().filter(|set| set.contains(feature)).count();
        debug_assert!(
            carriers > 0,
            "feature {feature:?} has no carriers in this class"
        );
        let value = -((carriers as f64 / total_words as f64).log2());
        self.values.insert(feature.clone(), value);
        value
    }

    /// Total information content of a feature set
    pub fn set_info<'a>(
        &mut self,
        class: &ClassFeatures,
        total_words: usize,
        features: impl IntoIterator<Item = &'a Feature>,
    ) -> f64 {
        features
            .into_iter()
            .map(|f| self.info(class, total_words, f))
            .sum()
    }

    /// Number of memoized features
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is memoized yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
