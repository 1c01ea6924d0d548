//! Bounded top-K ranking maintenance
//!
//! Keeps the K best pairs seen so far. A new pair is admitted while there
//! is room, or when its score strictly exceeds the current minimum kept
//! score, replacing that minimum. Entries stay sorted descending.

use super::SimilarPair;

/// Bounded keeper of the top-K [`SimilarPair`]s by score
#[derive(Debug, Clone)]
pub struct TopKeeper {
    k: usize,
    entries: Vec<SimilarPair>,
}

impl TopKeeper {
    /// Create a keeper holding at most `k` pairs
    pub fn new(k: usize) -> Self {
        Self {
            k,
            entries: Vec::with_capacity(k),
        }
    }

    /// Offer a pair; it is kept only if it beats the current minimum
    /// (or there is still room)
    pub fn offer(&mut self, pair: SimilarPair) {
        if self.k == 0 {
            return;
        }
        if self.entries.len() < self.k {
            self.entries.push(pair);
            self.sort();
        } else if pair.score > self.entries[self.entries.len() - 1].score {
            let last = self.entries.len() - 1;
            self.entries[last] = pair;
            self.sort();
        }
    }

    /// The lowest kept score, if any pair is kept
    pub fn min_score(&self) -> Option<f64> {
        self.entries.last().map(|p| p.score)
    }

    /// Number of kept pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is kept yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the keeper, returning pairs sorted by score descending
    pub fn into_sorted(self) -> Vec<SimilarPair> {
        self.entries
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.word_1.cmp(&b.word_1))
                .then_with(|| a.word_2.cmp(&b.word_2))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_until_capacity() {
        let mut keeper = TopKeeper::new(3);
        keeper.offer(SimilarPair::new(0.1, "a", "b"));
        keeper.offer(SimilarPair::new(0.2, "c", "d"));

        assert_eq!(keeper.len(), 2);
        assert_eq!(keeper.min_score(), Some(0.1));
    }

    #[test]
    fn test_replaces_minimum_when_better() {
        let mut keeper = TopKeeper::new(2);
        keeper.offer(SimilarPair::new(0.1, "a", "b"));
        keeper.offer(SimilarPair::new(0.2, "c", "d"));
        keeper.offer(SimilarPair::new(0.5, "e", "f"));

        let kept = keeper.into_sorted();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].score, 0.5);
        assert_eq!(kept[1].score, 0.2);
    }

    #[test]
    fn test_equal_score_not_admitted_when_full() {
        let mut keeper = TopKeeper::new(1);
        keeper.offer(SimilarPair::new(0.3, "a", "b"));
        keeper.offer(SimilarPair::new(0.3, "c", "d"));

        let kept = keeper.into_sorted();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].word_1, "a");
    }

    #[test]
    fn test_never_exceeds_k() {
        let mut keeper = TopKeeper::new(4);
        for i in 0..100 {
            keeper.offer(SimilarPair::new(i as f64 / 100.0, "w", "v"));
        }
        assert_eq!(keeper.len(), 4);

        // Every kept score beats every rejected score.
        let kept = keeper.into_sorted();
        assert_eq!(kept[0].score, 0.99);
        assert_eq!(kept[3].score, 0.96);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut keeper = TopKeeper::new(0);
        keeper.offer(SimilarPair::new(1.0, "a", "b"));

        assert!(keeper.is_empty());
        assert!(keeper.into_sorted().is_empty());
    }

    #[test]
    fn test_output_sorted_descending() {
        let mut keeper = TopKeeper::new(5);
        for (score, w) in [(0.4, "d"), (0.9, "a"), (0.1, "e"), (0.7, "b")] {
            keeper.offer(SimilarPair::new(score, w, w));
        }

        let kept = keeper.into_sorted();
        for pair in kept.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}
