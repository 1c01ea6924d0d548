//! Triple aggregation pass
//!
//! Scans annotated documents once and files every token whose dependency
//! relation is in the configured set under (relation, modifier lemma,
//! head lemma). Lemmas are lowercase-normalized at filing time.
//!
//! The optional compound-word policy merges a `compound` dependent with
//! its head into a single multi-word modifier (e.g. "coffee machine")
//! filed under the head's own relation, suppressing the head's plain
//! single-word filing so the head is not counted twice.

use crate::corpus::TokenSource;
use crate::types::{CompoundPolicy, RelationSet, Token};
use rustc_hash::FxHashSet;

use super::{Triple, TripleTable};

/// Dependency label marking a multi-word compound dependent
const COMPOUND_RELATION: &str = "compound";

/// Single-pass builder of a [`TripleTable`]
#[derive(Debug, Clone)]
pub struct TripleAggregator {
    relations: RelationSet,
    compound_policy: CompoundPolicy,
}

impl Default for TripleAggregator {
    fn default() -> Self {
        Self::new(RelationSet::default())
    }
}

impl TripleAggregator {
    /// Create an aggregator for the given relation set
    pub fn new(relations: RelationSet) -> Self {
        Self {
            relations,
            compound_policy: CompoundPolicy::Ignore,
        }
    }

    /// Set the compound-word merging policy
    pub fn with_compound_policy(mut self, policy: CompoundPolicy) -> Self {
        self.compound_policy = policy;
        self
    }

    /// Aggregate a sequence of documents into a fresh table
    pub fn aggregate<'a>(&self, docs: impl IntoIterator<Item = &'a [Token]>) -> TripleTable {
        let mut table = TripleTable::new();
        for doc in docs {
            self.add_document(&mut table, doc);
        }
        table
    }

    /// Aggregate every document of a token source into a fresh table
    pub fn aggregate_source(&self, source: &dyn TokenSource) -> TripleTable {
        let mut table = TripleTable::new();
        for doc in source.documents() {
            self.add_document(&mut table, doc);
        }
        table
    }

    /// File one document's tokens into an existing table
    pub fn add_document(&self, table: &mut TripleTable, doc: &[Token]) {
        // Token indices whose plain single-word filing is suppressed
        // because they were absorbed into a compound modifier.
        let mut suppressed: FxHashSet<usize> = FxHashSet::default();

        if self.compound_policy == CompoundPolicy::Merge {
            self.merge_compounds(table, doc, &mut suppressed);
        }

        for token in doc {
            if token.is_root() || suppressed.contains(&token.token_idx) {
                continue;
            }
            if !self.relations.contains(&token.dep) {
                continue;
            }
            let Some(head) = doc.get(token.head) else {
                continue;
            };
            table.increment(Triple::new(
                token.dep.clone(),
                token.norm_lemma(),
                head.norm_lemma(),
            ));
        }
    }

    /// File compound dependents as multi-word modifiers.
    ///
    /// A token with relation `compound` whose head carries an interesting
    /// relation is joined with that head ("<modifier> <head>") and filed
    /// under the head's relation and the head's head. The head's own
    /// single-word filing is marked suppressed.
    fn merge_compounds(
        &self,
        table: &mut TripleTable,
        doc: &[Token],
        suppressed: &mut FxHashSet<usize>,
    ) {
        for token in doc {
            if token.dep != COMPOUND_RELATION {
                continue;
            }
            let Some(head) = doc.get(token.head) else {
                continue;
            };
            if head.is_root() || !self.relations.contains(&head.dep) {
                continue;
            }
            let Some(grand) = doc.get(head.head) else {
                continue;
            };
            let joined = format!("{} {}", token.norm_lemma(), head.norm_lemma());
            table.increment(Triple::new(head.dep.clone(), joined, grand.norm_lemma()));
            suppressed.insert(head.token_idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PosTag;

    /// "We have coffee" style document: root verb at index 1, with a
    /// subject and an object attached.
    fn have_coffee_doc() -> Vec<Token> {
        vec![
            Token::new("We", "we", PosTag::Pronoun, "nsubj", 1, 0, 0),
            Token::new("have", "have", PosTag::Verb, "ROOT", 1, 0, 1),
            Token::new("coffee", "coffee", PosTag::Noun, "dobj", 1, 0, 2),
        ]
    }

    #[test]
    fn test_basic_counting() {
        let agg = TripleAggregator::default();
        let doc = have_coffee_doc();
        let table = agg.aggregate([doc.as_slice()]);

        assert_eq!(table.count("dobj", "coffee", "have"), 1);
        assert_eq!(table.count("nsubj", "we", "have"), 1);
        assert_eq!(table.total(), 2);
    }

    #[test]
    fn test_root_not_counted() {
        let agg = TripleAggregator::new(RelationSet::from_labels(&["ROOT", "dobj"]));
        let doc = have_coffee_doc();
        let table = agg.aggregate([doc.as_slice()]);

        // Even with "ROOT" in the relation set, a self-headed token is
        // never filed.
        assert_eq!(table.count("ROOT", "have", "have"), 0);
        assert_eq!(table.total(), 1);
    }

    #[test]
    fn test_uninteresting_relation_ignored() {
        let agg = TripleAggregator::new(RelationSet::from_labels(&["dobj"]));
        let doc = have_coffee_doc();
        let table = agg.aggregate([doc.as_slice()]);

        assert_eq!(table.count("nsubj", "we", "have"), 0);
        assert_eq!(table.total(), 1);
    }

    #[test]
    fn test_lemmas_lowercased() {
        let doc = vec![
            Token::new("Paul", "Paul", PosTag::ProperNoun, "nsubj", 1, 0, 0),
            Token::new("Left", "Leave", PosTag::Verb, "ROOT", 1, 0, 1),
        ];
        let agg = TripleAggregator::default();
        let table = agg.aggregate([doc.as_slice()]);

        assert_eq!(table.count("nsubj", "paul", "leave"), 1);
    }

    #[test]
    fn test_multiple_documents_accumulate() {
        let agg = TripleAggregator::default();
        let doc = have_coffee_doc();
        let table = agg.aggregate(vec![doc.as_slice(), doc.as_slice()]);

        assert_eq!(table.count("dobj", "coffee", "have"), 2);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_idempotent_over_same_input() {
        let agg = TripleAggregator::default();
        let doc = have_coffee_doc();

        let first = agg.aggregate([doc.as_slice()]);
        let second = agg.aggregate([doc.as_slice()]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_stream_yields_empty_table() {
        let agg = TripleAggregator::default();
        let table = agg.aggregate(std::iter::empty::<&[Token]>());

        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    /// "We have coffee machines": "coffee" is a compound dependent of
    /// "machines", which is itself the direct object of "have".
    fn compound_doc() -> Vec<Token> {
        vec![
            Token::new("We", "we", PosTag::Pronoun, "nsubj", 1, 0, 0),
            Token::new("have", "have", PosTag::Verb, "ROOT", 1, 0, 1),
            Token::new("coffee", "coffee", PosTag::Noun, "compound", 3, 0, 2),
            Token::new("machines", "machine", PosTag::Noun, "dobj", 1, 0, 3),
        ]
    }

    #[test]
    fn test_compound_merge_files_joined_modifier() {
        let agg =
            TripleAggregator::default().with_compound_policy(CompoundPolicy::Merge);
        let doc = compound_doc();
        let table = agg.aggregate([doc.as_slice()]);

        assert_eq!(table.count("dobj", "coffee machine", "have"), 1);
        // The head's plain filing is suppressed — no double count.
        assert_eq!(table.count("dobj", "machine", "have"), 0);
        // Unrelated tokens are unaffected.
        assert_eq!(table.count("nsubj", "we", "have"), 1);
    }

    #[test]
    fn test_compound_ignore_policy_keeps_plain_filing() {
        let agg = TripleAggregator::default();
        let doc = compound_doc();
        let table = agg.aggregate([doc.as_slice()]);

        assert_eq!(table.count("dobj", "machine", "have"), 1);
        assert_eq!(table.count("dobj", "coffee machine", "have"), 0);
    }

    #[test]
    fn test_compound_with_uninteresting_head_not_merged() {
        // Head's relation ("punct") is not in the set, so the compound
        // token is not merged and nothing extra is filed.
        let doc = vec![
            Token::new("have", "have", PosTag::Verb, "ROOT", 0, 0, 0),
            Token::new("coffee", "coffee", PosTag::Noun, "compound", 2, 0, 1),
            Token::new("!", "!", PosTag::Punctuation, "punct", 0, 0, 2),
        ];
        let agg =
            TripleAggregator::default().with_compound_policy(CompoundPolicy::Merge);
        let table = agg.aggregate([doc.as_slice()]);

        assert!(table.is_empty());
    }
}
