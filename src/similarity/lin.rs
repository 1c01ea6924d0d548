//! Lin-style similarity calculator
//!
//! The similarity of two words is the information content of their shared
//! features, normalized by the information content of everything each
//! word does:
//!
//! ```text
//! sim(w1, w2) = 2 * I(features(w1) ∩ features(w2)) / (I(w1) + I(w2))
//! ```
//!
//! Pairs where either word has too few features, or whose combined
//! information content is zero, carry no signal and are skipped. The
//! pairwise scan is quadratic per part-of-speech class by design; exact
//! all-pairs comparison is what the ranking semantics are defined over.

use rayon::prelude::*;

use crate::features::{ClassFeatures, FeatureTable};
use crate::types::PosTag;

use super::info::InfoCache;
use super::top_k::TopKeeper;
use super::SimilarPair;

/// Below this many qualifying words across all classes, the parallel
/// entry point runs sequentially.
const PARALLEL_WORD_THRESHOLD: usize = 512;

/// Pairwise Lin similarity ranking over a [`FeatureTable`]
#[derive(Debug, Clone, Copy)]
pub struct LinSimilarity {
    /// A word needs strictly more features than this to be compared
    pub feature_threshold: usize,
    /// Number of pairs kept in the ranking
    pub top_k: usize,
}

impl Default for LinSimilarity {
    fn default() -> Self {
        Self {
            feature_threshold: 5,
            top_k: 10,
        }
    }
}

impl LinSimilarity {
    /// Create a calculator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum feature count (strict)
    pub fn with_feature_threshold(mut self, threshold: usize) -> Self {
        self.feature_threshold = threshold;
        self
    }

    /// Set the number of pairs to keep
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Similarity of two words within one class, or `None` when the pair
    /// is skipped (too few features, unknown word, or zero combined
    /// information content).
    ///
    /// The `cache` must be scoped to this class.
    pub fn similarity(
        &self,
        class: &ClassFeatures,
        cache: &mut InfoCache,
        word_1: &str,
        word_2: &str,
    ) -> Option<f64> {
        let features_1 = class.get(word_1)?;
        let features_2 = class.get(word_2)?;
        if features_1.len() <= self.feature_threshold
            || features_2.len() <= self.feature_threshold
        {
            return None;
        }

        let total_words = class.len();
        let info_1 = cache.set_info(class, total_words, features_1.iter());
        let info_2 = cache.set_info(class, total_words, features_2.iter());
        let combined = info_1 + info_2;
        if combined == 0.0 {
            return None;
        }

        let (smaller, larger) = if features_1.len() <= features_2.len() {
            (features_1, features_2)
        } else {
            (features_2, features_1)
        };
        let shared = cache.set_info(
            class,
            total_words,
            smaller.iter().filter(|f| larger.contains(*f)),
        );

        Some(2.0 * shared / combined)
    }

    /// Rank the top pairs within one part-of-speech class
    pub fn rank_class(&self, class: &ClassFeatures) -> Vec<SimilarPair> {
        let mut keeper = TopKeeper::new(self.top_k);
        self.rank_class_into(class, &mut keeper);
        keeper.into_sorted()
    }

    /// Rank the top pairs across every class of a feature table
    ///
    /// Each class gets a fresh information-content cache; the per-class
    /// results compete for one global top-K list, as in the original
    /// single-result-list design.
    pub fn rank_all(&self, table: &FeatureTable) -> Vec<SimilarPair> {
        let mut keeper = TopKeeper::new(self.top_k);
        for (_, class) in sorted_classes(table) {
            self.rank_class_into(class, &mut keeper);
        }
        keeper.into_sorted()
    }

    /// Like [`rank_all`](Self::rank_all), partitioning the pairwise scan
    /// across part-of-speech classes with rayon
    ///
    /// Small tables fall back to the sequential path. Each partition owns
    /// its table slice and cache; rankings merge only after every class
    /// completes.
    pub fn rank_all_parallel(&self, table: &FeatureTable) -> Vec<SimilarPair> {
        let classes = sorted_classes(table);
        let total_words: usize = classes.iter().map(|(_, c)| c.len()).sum();
        if total_words < PARALLEL_WORD_THRESHOLD {
            return self.rank_all(table);
        }

        let per_class: Vec<Vec<SimilarPair>> = classes
            .par_iter()
            .map(|(_, class)| self.rank_class(class))
            .collect();

        let mut keeper = TopKeeper::new(self.top_k);
        for ranking in per_class {
            for pair in ranking {
                keeper.offer(pair);
            }
        }
        keeper.into_sorted()
    }

    fn rank_class_into(&self, class: &ClassFeatures, keeper: &mut TopKeeper) {
        // Sorted word order keeps pair enumeration (and therefore tie
        // handling) deterministic across runs.
        let mut words: Vec<&str> = class.keys().map(String::as_str).collect();
        words.sort_unstable();

        let mut cache = InfoCache::new();
        for (i, word_1) in words.iter().enumerate() {
            for word_2 in &words[i + 1..] {
                if let Some(score) = self.similarity(class, &mut cache, word_1, word_2) {
                    keeper.offer(SimilarPair::new(score, *word_1, *word_2));
                }
            }
        }
    }
}

fn sorted_classes(table: &FeatureTable) -> Vec<(PosTag, &ClassFeatures)> {
    let mut classes: Vec<_> = table.classes().collect();
    classes.sort_by_key(|(pos, _)| *pos);
    classes
}
