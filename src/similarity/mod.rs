//! Distributional word similarity
//!
//! Lin-style information-theoretic similarity over shared dependency
//! features, computed pairwise within each part-of-speech class and kept
//! as a bounded top-K ranking.

pub mod info;
pub mod lin;
pub mod top_k;

pub use info::InfoCache;
pub use lin::LinSimilarity;
pub use top_k::TopKeeper;

/// One ranked pair of distributionally similar words
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarPair {
    /// Normalized similarity in `[0, 1]`
    pub score: f64,
    /// First word of the pair
    pub word_1: String,
    /// Second word of the pair
    pub word_2: String,
}

impl SimilarPair {
    /// Create a new similar pair
    pub fn new(score: f64, word_1: impl Into<String>, word_2: impl Into<String>) -> Self {
        Self {
            score,
            word_1: word_1.into(),
            word_2: word_2.into(),
        }
    }
}
