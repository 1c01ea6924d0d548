//! Pointwise mutual information ranking
//!
//! Ranks the modifier words co-occurring with a (relation, head) query by
//! bias-corrected PMI against the triple frequency table. See
//! [`biased::BiasedPmi`] for the calculator.

pub mod biased;

pub use biased::BiasedPmi;

/// One ranked collocation candidate
#[derive(Debug, Clone, PartialEq)]
pub struct Collocation {
    /// Biased-PMI score
    pub score: f64,
    /// The modifier word
    pub modifier: String,
    /// Raw joint count of (relation, modifier, head)
    pub count: u64,
}

impl Collocation {
    /// Create a new collocation entry
    pub fn new(score: f64, modifier: impl Into<String>, count: u64) -> Self {
        Self {
            score,
            modifier: modifier.into(),
            count,
        }
    }
}
