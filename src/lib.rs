//! # rapid-colloc
//!
//! Statistical association measures over dependency-annotated corpora:
//!
//! - **Collocation ranking** — biased pointwise mutual information (PMI)
//!   between a head word and the words holding a given dependency
//!   relation to it ([`pmi::BiasedPmi`]).
//! - **Distributional similarity** — Lin-style information-theoretic
//!   similarity between words sharing a part-of-speech class, derived
//!   from the dependency features they participate in
//!   ([`similarity::LinSimilarity`]).
//!
//! Parsing, tagging, and lemmatization happen elsewhere; annotated
//! tokens arrive through the [`corpus::TokenSource`] seam. Both
//! pipelines build their table in one pass over the token stream and
//! rank from it; they share no state.
//!
//! # Quick start
//!
//! ```rust
//! use rapid_colloc::corpus::InMemoryCorpus;
//! use rapid_colloc::engine::AssociationEngine;
//! use rapid_colloc::types::{PosTag, Token};
//!
//! let mut corpus = InMemoryCorpus::new();
//! corpus.push_document(vec![
//!     Token::new("coffee", "coffee", PosTag::Noun, "dobj", 1, 0, 0),
//!     Token::new("have", "have", PosTag::Verb, "ROOT", 1, 0, 1),
//!     Token::new("tea", "tea", PosTag::Noun, "dobj", 1, 0, 2),
//! ]);
//!
//! let engine = AssociationEngine::new();
//! let ranked = engine.collocations(&corpus, "dobj", "have").unwrap();
//! assert_eq!(ranked[0].modifier, "coffee");
//! ```

pub mod corpus;
pub mod engine;
pub mod error;
pub mod features;
pub mod pmi;
pub mod report;
pub mod similarity;
pub mod triples;
pub mod types;

pub use engine::AssociationEngine;
pub use error::RankError;
pub use pmi::{BiasedPmi, Collocation};
pub use similarity::{LinSimilarity, SimilarPair};
pub use types::{CompoundPolicy, EngineConfig, PosTag, RelationSet, Token};

use features::aggregator::FeatureAggregator;
use features::{ClassFeatures, FeatureTable};
use triples::aggregator::TripleAggregator;
use triples::TripleTable;

/// Build a triple frequency table from a token stream.
///
/// Convenience wrapper over [`triples::aggregator::TripleAggregator`]
/// with the default (no compound merging) policy.
pub fn aggregate_triples<'a>(
    docs: impl IntoIterator<Item = &'a [Token]>,
    relations: &RelationSet,
) -> TripleTable {
    TripleAggregator::new(relations.clone()).aggregate(docs)
}

/// Rank the collocations of (`relation`, `head`) against a triple table.
///
/// # Errors
///
/// See [`BiasedPmi::rank`].
pub fn rank_collocations(
    table: &TripleTable,
    relation: &str,
    head: &str,
    bias: f64,
) -> Result<Vec<Collocation>, RankError> {
    BiasedPmi::new().with_bias(bias).rank(table, relation, head)
}

/// Build a per-POS-class feature table from a token stream.
pub fn aggregate_features<'a>(
    docs: impl IntoIterator<Item = &'a [Token]>,
    relations: &RelationSet,
) -> FeatureTable {
    FeatureAggregator::new(relations.clone()).aggregate(docs)
}

/// Rank the most similar word pairs within one part-of-speech class.
pub fn rank_similar_pairs(
    features: &ClassFeatures,
    threshold: usize,
    top_k: usize,
) -> Vec<SimilarPair> {
    LinSimilarity::new()
        .with_feature_threshold(threshold)
        .with_top_k(top_k)
        .rank_class(features)
}
