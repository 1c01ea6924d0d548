//! Biased-PMI calculator
//!
//! For a query (relation, head), every modifier observed with that head
//! under that relation is scored as
//!
//! ```text
//! score = log2( p_abc / (p_b * p_a|b * p_c|b) )
//! ```
//!
//! where `p_abc` is the joint triple probability after subtracting the
//! bias constant from the raw count. The bias discounts low-frequency
//! triples; bias 0 gives unbiased PMI.

use crate::error::RankError;
use crate::triples::TripleTable;
use rustc_hash::FxHashMap;

use super::Collocation;

/// Bias-corrected PMI ranking over a [`TripleTable`]
#[derive(Debug, Clone, Copy)]
pub struct BiasedPmi {
    /// Constant in `[0, 1)` subtracted from raw joint counts
    pub bias: f64,
}

impl Default for BiasedPmi {
    fn default() -> Self {
        Self { bias: 0.0 }
    }
}

impl BiasedPmi {
    /// Create an unbiased PMI calculator
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bias constant
    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    /// Rank every modifier co-occurring with `head` under `relation`.
    ///
    /// Returns candidates sorted by score descending; ties break on
    /// (modifier, count) ascending so repeated runs order identically.
    ///
    /// # Errors
    ///
    /// [`RankError::BiasOutOfRange`] if the bias constant is not in
    /// `[0, 1)`. [`RankError::InsufficientData`] if the table's grand
    /// total, the relation total, or the relation-head total is zero, or
    /// if the table holds fewer than two observations overall — a single
    /// datapoint leaves no baseline to compare against.
    pub fn rank(
        &self,
        table: &TripleTable,
        relation: &str,
        head: &str,
    ) -> Result<Vec<Collocation>, RankError> {
        if !(0.0..1.0).contains(&self.bias) {
            return Err(RankError::BiasOutOfRange(self.bias));
        }

        let insufficient = || RankError::InsufficientData {
            relation: relation.to_string(),
            head: head.to_string(),
        };

        let total = table.total();
        if total < 2 {
            return Err(insufficient());
        }

        // One scan collects the relation total, the per-modifier totals
        // for this relation, and the candidate set.
        let mut rel_total: u64 = 0;
        let mut rel_head_total: u64 = 0;
        let mut rel_mod_totals: FxHashMap<&str, u64> = FxHashMap::default();
        let mut candidates: Vec<(&str, u64)> = Vec::new();

        for (triple, count) in table.iter() {
            if triple.relation != relation {
                continue;
            }
            rel_total += count;
            *rel_mod_totals.entry(triple.modifier.as_str()).or_insert(0) += count;
            if triple.head == head && count > 0 {
                rel_head_total += count;
                candidates.push((triple.modifier.as_str(), count));
            }
        }

        if rel_total == 0 || rel_head_total == 0 {
            return Err(insufficient());
        }

        let total = total as f64;
        let rel_total = rel_total as f64;
        let p_b = rel_total / total;
        let p_a_given_b = rel_head_total as f64 / rel_total;

        let mut ranked: Vec<Collocation> = Vec::with_capacity(candidates.len());
        for (modifier, count) in candidates {
            let rel_mod_total = rel_mod_totals.get(modifier).copied().unwrap_or(0);
            let p_c_given_b = rel_mod_total as f64 / rel_total;

            let p_abc = (count as f64 - self.bias) / total;
            if p_abc <= 0.0 {
                // Discounted joint probability is undefined for ranking.
                continue;
            }

            let baseline = p_b * p_a_given_b * p_c_given_b;
            let score = if baseline == 0.0 {
                // No baseline information: score as "no information".
                0.0
            } else {
                (p_abc / baseline).log2()
            };
            ranked.push(Collocation::new(score, modifier, count));
        }

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.modifier.cmp(&b.modifier))
                .then_with(|| a.count.cmp(&b.count))
        });
        Ok(ranked)
    }
}
