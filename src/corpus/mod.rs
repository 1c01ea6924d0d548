//! Annotated token source seam
//!
//! Parsing, tagging, and lemmatization happen outside this crate. Whatever
//! pipeline produces the annotations plugs in through [`TokenSource`]: a
//! finite sequence of documents, each a slice of [`Token`]s whose `head`
//! indices are local to that slice.
//!
//! [`InMemoryCorpus`] is the bundled implementation, suitable for tokens
//! deserialized from JSON or built programmatically (and for tests).

use crate::types::Token;

/// A finite source of dependency-annotated documents
///
/// The engine drains a source exactly once per aggregation pass. Sources
/// own their tokens; the engine only borrows them.
pub trait TokenSource {
    /// Iterate the documents in order
    fn documents(&self) -> Box<dyn Iterator<Item = &[Token]> + '_>;

    /// Total number of tokens across all documents
    fn num_tokens(&self) -> usize {
        self.documents().map(|d| d.len()).sum()
    }
}

/// A token source backed by in-memory document vectors
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    docs: Vec<Vec<Token>>,
}

impl InMemoryCorpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a corpus from pre-built documents
    pub fn from_documents(docs: Vec<Vec<Token>>) -> Self {
        Self { docs }
    }

    /// Append a document
    pub fn push_document(&mut self, tokens: Vec<Token>) {
        self.docs.push(tokens);
    }

    /// Number of documents
    pub fn num_documents(&self) -> usize {
        self.docs.len()
    }

    /// Whether the corpus holds no documents
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl TokenSource for InMemoryCorpus {
    fn documents(&self) -> Box<dyn Iterator<Item = &[Token]> + '_> {
        Box::new(self.docs.iter().map(|d| d.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PosTag;

    fn sample_doc() -> Vec<Token> {
        vec![
            Token::new("coffee", "coffee", PosTag::Noun, "nsubj", 1, 0, 0),
            Token::new("brewed", "brew", PosTag::Verb, "ROOT", 1, 0, 1),
        ]
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = InMemoryCorpus::new();

        assert!(corpus.is_empty());
        assert_eq!(corpus.num_documents(), 0);
        assert_eq!(corpus.num_tokens(), 0);
        assert_eq!(corpus.documents().count(), 0);
    }

    #[test]
    fn test_documents_in_order() {
        let mut corpus = InMemoryCorpus::new();
        corpus.push_document(sample_doc());
        corpus.push_document(vec![Token::new(
            "tea", "tea", PosTag::Noun, "ROOT", 0, 0, 0,
        )]);

        let lens: Vec<usize> = corpus.documents().map(|d| d.len()).collect();
        assert_eq!(lens, vec![2, 1]);
        assert_eq!(corpus.num_tokens(), 3);
    }

    #[test]
    fn test_source_is_redrainable() {
        let corpus = InMemoryCorpus::from_documents(vec![sample_doc()]);

        // Two independent passes over the same source see the same data.
        let first: Vec<usize> = corpus.documents().map(|d| d.len()).collect();
        let second: Vec<usize> = corpus.documents().map(|d| d.len()).collect();
        assert_eq!(first, second);
    }
}
