pub mod evaluate;
pub mod expand;
pub mod preprocess;
pub mod search;

use std::collections::HashSet;

use indexmap::IndexSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::utils::math::TfpMatrix;

/// Vocabulary and proportional weights produced by a fit pass.
///
/// Frozen once built: `transform` reuses this state verbatim and a new
/// document set requires a new vectorizer (or another `fit_transform`,
/// which replaces the state wholesale).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedState {
    /// Unique terms in first-seen order across the fitted documents.
    /// Insertion order determines matrix column indices.
    pub vocabulary: IndexSet<String>,
    /// Proportional weight per vocabulary term:
    /// `p[j] = ln(doc_count / df[j])`.
    /// `df[j] >= 1` by construction, so every entry is finite.
    pub p: Vec<f64>,
}

/// TF-P vectorizer.
///
/// Converts normalized (preprocessed, space-separated) texts into
/// dense TF-P matrices: raw term counts scaled per term by a
/// log-inverse-document-frequency-like proportional weight.
///
/// `fit_transform` induces the vocabulary and weights from a document
/// set; `transform` projects further texts onto that fitted state,
/// silently dropping out-of-vocabulary terms.
#[derive(Debug, Clone, Default)]
pub struct TfpVectorizer {
    fitted: Option<FittedState>,
}

impl TfpVectorizer {
    /// Create an unfitted vectorizer.
    pub fn new() -> Self {
        Self { fitted: None }
    }

    /// Fitted vocabulary, if any.
    pub fn vocabulary(&self) -> Option<&IndexSet<String>> {
        self.fitted.as_ref().map(|f| &f.vocabulary)
    }

    /// Fitted proportional weights, if any.
    pub fn p(&self) -> Option<&[f64]> {
        self.fitted.as_ref().map(|f| f.p.as_slice())
    }

    /// Fitted state, if any. Serializable; a fitted vectorizer can be
    /// reconstructed from it with [`TfpVectorizer::from_fitted`].
    pub fn fitted(&self) -> Option<&FittedState> {
        self.fitted.as_ref()
    }

    /// Rebuild a vectorizer from previously fitted state.
    pub fn from_fitted(state: FittedState) -> Self {
        Self {
            fitted: Some(state),
        }
    }

    /// Build the vocabulary and weights from `documents` and return
    /// their TF-P matrix.
    ///
    /// The vocabulary is the union of all whitespace-split terms in
    /// first-seen order, left to right across documents. `df` counts
    /// the documents containing each term at least once, and
    /// `p[j] = ln(doc_count / df[j])`.
    ///
    /// # Arguments
    /// * `documents` - normalized texts, one per document
    ///
    /// # Returns
    /// * `TfpMatrix` - `|documents| x |vocabulary|` weighted matrix
    pub fn fit_transform<T>(&mut self, documents: &[T]) -> TfpMatrix
    where
        T: AsRef<str> + Sync,
    {
        // Vocabulary build and df counting are sequential reductions
        // over all documents; only the per-row weighting below runs in
        // parallel.
        let mut vocabulary: IndexSet<String> = IndexSet::new();
        for doc in documents {
            for term in doc.as_ref().split_whitespace() {
                if !vocabulary.contains(term) {
                    vocabulary.insert(term.to_string());
                }
            }
        }

        let mut df = vec![0u64; vocabulary.len()];
        for doc in documents {
            let seen: HashSet<&str> = doc.as_ref().split_whitespace().collect();
            for term in seen {
                if let Some(j) = vocabulary.get_index_of(term) {
                    df[j] += 1;
                }
            }
        }

        let doc_count = documents.len() as f64;
        let p: Vec<f64> = df.iter().map(|&d| (doc_count / d as f64).ln()).collect();

        let state = FittedState { vocabulary, p };
        let matrix = Self::weigh(&state, documents);
        self.fitted = Some(state);
        matrix
    }

    /// Project `documents` onto the fitted vocabulary and weights.
    ///
    /// Terms outside the vocabulary have no column and contribute
    /// nothing; a document made only of such terms yields an all-zero
    /// row, which is a valid result. Calling this before any
    /// `fit_transform` is a programming error and fails fast.
    pub fn transform<T>(&self, documents: &[T]) -> Result<TfpMatrix, Error>
    where
        T: AsRef<str> + Sync,
    {
        let state = self.fitted.as_ref().ok_or(Error::UnfittedVectorizer)?;
        Ok(Self::weigh(state, documents))
    }

    /// Compute the TF-P matrix of `documents` under `state`.
    /// Rows are independent, so they are filled in parallel.
    fn weigh<T>(state: &FittedState, documents: &[T]) -> TfpMatrix
    where
        T: AsRef<str> + Sync,
    {
        let mut matrix = TfpMatrix::zeros(documents.len(), state.vocabulary.len());
        if state.vocabulary.is_empty() {
            return matrix;
        }
        matrix
            .par_rows_mut()
            .zip(documents.par_iter())
            .for_each(|(row, doc)| {
                for term in doc.as_ref().split_whitespace() {
                    if let Some(j) = state.vocabulary.get_index_of(term) {
                        row[j] += 1.0;
                    }
                }
                for (value, weight) in row.iter_mut().zip(state.p.iter()) {
                    *value *= weight;
                }
            });
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn vocabulary_is_unique_and_first_seen_ordered() {
        let mut vectorizer = TfpVectorizer::new();
        vectorizer.fit_transform(&["b a b c", "c d a"]);

        let vocab: Vec<&str> = vectorizer
            .vocabulary()
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(vocab, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn proportional_weights_match_document_frequency() {
        let mut vectorizer = TfpVectorizer::new();
        // "a" in all three docs, "b" in exactly one
        vectorizer.fit_transform(&["a b", "a", "a"]);

        let vocab = vectorizer.vocabulary().unwrap();
        let p = vectorizer.p().unwrap();
        let j_a = vocab.get_index_of("a").unwrap();
        let j_b = vocab.get_index_of("b").unwrap();
        assert_close(p[j_a], 0.0); // df == doc_count => ln(1)
        assert_close(p[j_b], 3.0_f64.ln()); // df == 1 of N == 3
    }

    #[test]
    fn fit_transform_weights_counts_by_p() {
        let mut vectorizer = TfpVectorizer::new();
        let tfp = vectorizer.fit_transform(&["a a b", "a"]);

        // vocab: [a, b]; p = [ln(2/2), ln(2/1)]
        let ln2 = 2.0_f64.ln();
        assert_eq!(tfp.rows(), 2);
        assert_eq!(tfp.cols(), 2);
        assert_close(tfp.row(0)[0], 0.0); // 2 * ln(1)
        assert_close(tfp.row(0)[1], ln2); // 1 * ln(2)
        assert_close(tfp.row(1)[0], 0.0);
        assert_close(tfp.row(1)[1], 0.0);
    }

    #[test]
    fn transform_drops_out_of_vocabulary_terms() {
        let mut vectorizer = TfpVectorizer::new();
        vectorizer.fit_transform(&["a b", "b c"]);

        let out = vectorizer.transform(&["x y z"]).unwrap();
        assert!(out.row(0).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn transform_before_fit_fails_fast() {
        let vectorizer = TfpVectorizer::new();
        assert_eq!(
            vectorizer.transform(&["a"]).unwrap_err(),
            Error::UnfittedVectorizer
        );
    }

    #[test]
    fn empty_document_yields_zero_row() {
        let mut vectorizer = TfpVectorizer::new();
        let tfp = vectorizer.fit_transform(&["a b", ""]);
        assert!(tfp.row(1).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn single_document_corpus_weights_to_zero() {
        // df == 1 == doc_count for every term, so p == ln(1) == 0 and
        // the whole matrix collapses to zero.
        let mut vectorizer = TfpVectorizer::new();
        let tfp = vectorizer.fit_transform(&["only one document here"]);
        assert!(tfp.row(0).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn fitted_state_survives_cbor_snapshot() {
        let mut vectorizer = TfpVectorizer::new();
        vectorizer.fit_transform(&["a b", "b c"]);

        let bytes = serde_cbor::to_vec(vectorizer.fitted().unwrap()).unwrap();
        let state: FittedState = serde_cbor::from_slice(&bytes).unwrap();
        let restored = TfpVectorizer::from_fitted(state);

        let a = vectorizer.transform(&["b c a"]).unwrap();
        let b = restored.transform(&["b c a"]).unwrap();
        assert_eq!(a, b);
    }
}
