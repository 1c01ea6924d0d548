//! Engine orchestration
//!
//! [`AssociationEngine`] wires a [`TokenSource`] through the two
//! independent pipelines — triple aggregation → PMI ranking, and feature
//! aggregation → similarity ranking — under one [`EngineConfig`]. The
//! pipelines share no state; either can run standalone.

use crate::corpus::TokenSource;
use crate::error::RankError;
use crate::features::aggregator::FeatureAggregator;
use crate::pmi::{BiasedPmi, Collocation};
use crate::similarity::{LinSimilarity, SimilarPair};
use crate::triples::aggregator::TripleAggregator;
use crate::triples::TripleTable;
use crate::types::EngineConfig;

/// Enter a tracing span for an engine stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler
/// eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("engine_stage", stage = $name).entered();
    };
}

/// Configuration-driven front door for both association pipelines
#[derive(Debug, Clone, Default)]
pub struct AssociationEngine {
    config: EngineConfig,
}

impl AssociationEngine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build the triple frequency table from a token source
    pub fn build_triple_table(&self, source: &dyn TokenSource) -> TripleTable {
        trace_stage!("aggregate_triples");
        TripleAggregator::new(self.config.relations.clone())
            .with_compound_policy(self.config.compound_policy)
            .aggregate_source(source)
    }

    /// Rank the collocations of (`relation`, `head`) over a source.
    ///
    /// Drains the source once, then ranks against the resulting table.
    ///
    /// # Errors
    ///
    /// Propagates [`RankError`] from the PMI calculator; see
    /// [`BiasedPmi::rank`].
    pub fn collocations(
        &self,
        source: &dyn TokenSource,
        relation: &str,
        head: &str,
    ) -> Result<Vec<Collocation>, RankError> {
        let table = self.build_triple_table(source);
        trace_stage!("rank_collocations");
        BiasedPmi::new().with_bias(self.config.bias).rank(&table, relation, head)
    }

    /// Rank the most distributionally similar word pairs over a source.
    ///
    /// Drains the source once, aggregates features per part-of-speech
    /// class, and merges every class's pairwise ranking into one global
    /// top-K list.
    pub fn similar_words(&self, source: &dyn TokenSource) -> Vec<SimilarPair> {
        trace_stage!("aggregate_features");
        let table =
            FeatureAggregator::new(self.config.relations.clone()).aggregate_source(source);

        trace_stage!("rank_similar_pairs");
        LinSimilarity::new()
            .with_feature_threshold(self.config.feature_threshold)
            .with_top_k(self.config.top_k)
            .rank_all_parallel(&table)
    }
}
