//! Core types shared across the crate
//!
//! Defines the annotated [`Token`] consumed from the corpus collaborator,
//! the coarse [`PosTag`] classes, the configured [`RelationSet`] of
//! dependency labels, and the top-level [`EngineConfig`].

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Coarse part-of-speech classes
///
/// Matches the universal tag inventory used by common annotation
/// pipelines; anything outside the inventory maps to `Other`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Numeral,
    Particle,
    Punctuation,
    Symbol,
    Other,
}

/// A dependency-annotated token
///
/// Produced by an external annotation pipeline and only ever read by the
/// engine. `head` is the index of the syntactic head within the same
/// document slice; a sentence root points at itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appeared in the text
    pub text: String,
    /// Normalized base form
    pub lemma: String,
    /// Coarse part-of-speech class
    pub pos: PosTag,
    /// Dependency relation label to the head (e.g. "dobj", "amod")
    pub dep: String,
    /// Index of the head token within the same document slice
    pub head: usize,
    /// Index of the sentence this token belongs to
    pub sentence_idx: usize,
    /// Index of this token within the document slice
    pub token_idx: usize,
}

impl Token {
    /// Create a new token
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PosTag,
        dep: impl Into<String>,
        head: usize,
        sentence_idx: usize,
        token_idx: usize,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            dep: dep.into(),
            head,
            sentence_idx,
            token_idx,
        }
    }

    /// Whether this token is a sentence root (its own head)
    pub fn is_root(&self) -> bool {
        self.head == self.token_idx
    }

    /// Whether the surface form is non-empty and entirely alphabetic
    pub fn is_alphabetic(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphabetic)
    }

    /// Lowercased lemma, as filed into the frequency and feature tables
    pub fn norm_lemma(&self) -> String {
        self.lemma.to_lowercase()
    }
}

/// The set of dependency relations the aggregators consider interesting
///
/// Tokens carrying a relation outside this set are ignored by both the
/// triple and the feature aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationSet {
    relations: FxHashSet<String>,
}

impl Default for RelationSet {
    /// The standard seven-relation set: subjects, objects, and the
    /// common modifier relations.
    fn default() -> Self {
        Self::from_labels(&[
            "nsubj", "amod", "nounmod", "advmod", "csubj", "ccomp", "dobj",
        ])
    }
}

impl RelationSet {
    /// Create an empty relation set (ignores every token)
    pub fn empty() -> Self {
        Self {
            relations: FxHashSet::default(),
        }
    }

    /// Create a relation set from a list of labels
    pub fn from_labels(labels: &[&str]) -> Self {
        Self {
            relations: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Add a relation label to the set
    pub fn insert(&mut self, label: impl Into<String>) {
        self.relations.insert(label.into());
    }

    /// Whether the given label is in the set
    pub fn contains(&self, label: &str) -> bool {
        self.relations.contains(label)
    }

    /// Number of labels in the set
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

/// How the triple aggregator treats `compound` dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundPolicy {
    /// Compound tokens are ordinary tokens; no merging.
    #[default]
    Ignore,
    /// A compound modifier and its head are merged into one multi-word
    /// modifier filed under the head's relation, and the head's own
    /// single-word filing is suppressed.
    Merge,
}

/// Configuration for the association engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Dependency relations considered by both aggregators
    #[serde(default)]
    pub relations: RelationSet,
    /// PMI bias constant in `[0, 1)`; 0 gives unbiased PMI
    #[serde(default)]
    pub bias: f64,
    /// Minimum feature count (strict) for a word to enter similarity
    #[serde(default = "default_feature_threshold")]
    pub feature_threshold: usize,
    /// Number of similar pairs to keep
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Compound-word merging strategy for the triple aggregator
    #[serde(default)]
    pub compound_policy: CompoundPolicy,
}

fn default_feature_threshold() -> usize {
    5
}

fn default_top_k() -> usize {
    10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            relations: RelationSet::default(),
            bias: 0.0,
            feature_threshold: default_feature_threshold(),
            top_k: default_top_k(),
            compound_policy: CompoundPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Create a config with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relation set
    pub fn with_relations(mut self, relations: RelationSet) -> Self {
        self.relations = relations;
        self
    }

    /// Set the PMI bias constant
    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    /// Set the similarity feature threshold
    pub fn with_feature_threshold(mut self, threshold: usize) -> Self {
        self.feature_threshold = threshold;
        self
    }

    /// Set the number of similar pairs to keep
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the compound-word policy
    pub fn with_compound_policy(mut self, policy: CompoundPolicy) -> Self {
        self.compound_policy = policy;
        self
    }
}
