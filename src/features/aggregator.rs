//! Feature aggregation pass
//!
//! Scans annotated documents once. A token qualifies when its surface
//! form and its head's surface form are both alphabetic and its relation
//! is in the configured set; the feature (relation, token lemma) is then
//! recorded for (head POS class, lowercased head lemma).

use crate::corpus::TokenSource;
use crate::types::{RelationSet, Token};

use super::{Feature, FeatureTable};

/// Single-pass builder of a [`FeatureTable`]
#[derive(Debug, Clone)]
pub struct FeatureAggregator {
    relations: RelationSet,
}

impl Default for FeatureAggregator {
    fn default() -> Self {
        Self::new(RelationSet::default())
    }
}

impl FeatureAggregator {
    /// Create an aggregator for the given relation set
    pub fn new(relations: RelationSet) -> Self {
        Self { relations }
    }

    /// Aggregate a sequence of documents into a fresh table
    pub fn aggregate<'a>(&self, docs: impl IntoIterator<Item = &'a [Token]>) -> FeatureTable {
        let mut table = FeatureTable::new();
        for doc in docs {
            self.add_document(&mut table, doc);
        }
        table
    }

    /// Aggregate every document of a token source into a fresh table
    pub fn aggregate_source(&self, source: &dyn TokenSource) -> FeatureTable {
        let mut table = FeatureTable::new();
        for doc in source.documents() {
            self.add_document(&mut table, doc);
        }
        table
    }

    /// Record one document's qualifying tokens into an existing table
    pub fn add_document(&self, table: &mut FeatureTable, doc: &[Token]) {
        for token in doc {
            if token.is_root() || !self.relations.contains(&token.dep) {
                continue;
            }
            let Some(head) = doc.get(token.head) else {
                continue;
            };
            if !token.is_alphabetic() || !head.is_alphabetic() {
                continue;
            }
            table.insert(
                head.pos,
                head.norm_lemma(),
                Feature::new(token.dep.clone(), token.norm_lemma()),
            );
        }
    }
}
