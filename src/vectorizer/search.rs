use crate::error::Error;
use crate::vectorizer::evaluate::scoring::{self, Hits};
use crate::vectorizer::expand::QueryExpander;
use crate::vectorizer::preprocess::Preprocessor;
use crate::vectorizer::TfpVectorizer;

/// End-to-end ranking pipeline.
///
/// Raw documents and a raw query go in; ranked `(index, score)` hits
/// come out. Each call runs synchronously to completion: preprocess,
/// expand the query against one freshly fitted vectorizer, then score
/// the expanded query against a second one. The two vectorizers never
/// share vocabulary state.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    preprocessor: Preprocessor,
    expander: QueryExpander,
}

impl Pipeline {
    /// Pipeline with default stopwords and expansion threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline with a caller-chosen expansion threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            preprocessor: Preprocessor::new(),
            expander: QueryExpander::new(threshold),
        }
    }

    /// Pipeline with caller-supplied components.
    pub fn with_components(preprocessor: Preprocessor, expander: QueryExpander) -> Self {
        Self {
            preprocessor,
            expander,
        }
    }

    /// Rank `documents` against `query`, best match first.
    ///
    /// # Arguments
    /// * `documents` - raw document texts, identified by position
    /// * `query` - raw query text
    ///
    /// # Returns
    /// * `Hits` - descending by score; equal scores keep input order
    pub fn rank<T>(&self, documents: &[T], query: &str) -> Result<Hits, Error>
    where
        T: AsRef<str> + Sync,
    {
        let normalized: Vec<String> = documents
            .iter()
            .map(|doc| self.preprocessor.preprocess(doc.as_ref()))
            .collect();
        let normalized_query = self.preprocessor.preprocess(query);

        let expanded = self.expander.expand(&normalized_query, &normalized)?;

        let mut vectorizer = TfpVectorizer::new();
        let tfp = vectorizer.fit_transform(&normalized);
        let query_mat = vectorizer.transform(&[expanded.as_str()])?;

        let sizes: Vec<usize> = normalized
            .iter()
            .map(|doc| doc.split_whitespace().count())
            .collect();

        Ok(scoring::rank(&tfp, query_mat.row(0), &sizes))
    }
}

/// Rank with the default pipeline configuration.
pub fn rank_documents<T>(documents: &[T], query: &str) -> Result<Hits, Error>
where
    T: AsRef<str> + Sync,
{
    Pipeline::new().rank(documents, query)
}
