use indexmap::IndexSet;

use crate::error::Error;
use crate::utils::math::vector;
use crate::vectorizer::TfpVectorizer;

/// Default similarity threshold for pseudo-relevance feedback.
pub const DEFAULT_THRESHOLD: f64 = 0.65;

/// Pseudo-relevance-feedback query expansion.
///
/// Scores the original query against the document set with plain
/// cosine similarity over TF-P vectors, then unions the terms of every
/// document scoring at or above the threshold into the query's term
/// set. The expanded query is only ever consumed as a bag of terms, so
/// term order is just first-seen and duplicates collapse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryExpander {
    pub threshold: f64,
}

impl Default for QueryExpander {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl QueryExpander {
    /// Create an expander with a caller-chosen threshold.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Expand `query` with the terms of sufficiently similar documents.
    ///
    /// A fresh vectorizer is fitted on `documents` for the scoring
    /// pass; its vocabulary is never shared with the ranking pass. A
    /// zero-norm query or document vector scores 0 and contributes no
    /// expansion.
    ///
    /// # Arguments
    /// * `query` - normalized query text
    /// * `documents` - normalized document texts
    ///
    /// # Returns
    /// * `String` - expanded query, terms joined by single spaces
    pub fn expand<T>(&self, query: &str, documents: &[T]) -> Result<String, Error>
    where
        T: AsRef<str> + Sync,
    {
        let mut vectorizer = TfpVectorizer::new();
        let tfp = vectorizer.fit_transform(documents);
        let query_vec = vectorizer.transform(&[query])?;
        let query_row = query_vec.row(0);

        let mut terms: IndexSet<&str> = query.split_whitespace().collect();
        for (i, doc) in documents.iter().enumerate() {
            if vector::cosine(tfp.row(i), query_row) >= self.threshold {
                terms.extend(doc.as_ref().split_whitespace());
            }
        }
        Ok(terms.iter().copied().collect::<Vec<_>>().join(" "))
    }
}
