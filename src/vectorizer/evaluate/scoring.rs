//! Extended cosine similarity ranking.
//!
//! The score of document `i` against the expanded query is its cosine
//! similarity over TF-P vectors, scaled by two proportion factors that
//! the weighting scheme defines positionally:
//!
//! * an adjustment vector, the query vector divided pairwise by the
//!   per-document row sums of the TF-P matrix, applied to row `i` at
//!   position `i`;
//! * `p_qd`, the query vector divided pairwise by the document sizes,
//!   multiplied into the cosine at position `i`.
//!
//! Both divisions pair a vocabulary-indexed vector with a
//! document-indexed one. That pairing is part of the scheme as
//! published and is reproduced literally here rather than reinterpreted:
//! the division truncates to the shorter operand, and a row whose
//! positional entry is missing (vocabulary smaller than the document
//! count) or divided by zero contributes 0. The tests in this module
//! pin the exact numbers.

use crate::utils::math::{vector, TfpMatrix};

/// A single ranked result: original document index and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEntry {
    pub index: usize,
    pub score: f64,
}

/// Ranked results, descending by score.
///
/// Ties keep the documents' original input order (the sort is stable),
/// so a fully degenerate scoring pass returns the input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    /// Build hits from per-document scores and sort them.
    pub fn from_scores(scores: Vec<f64>) -> Self {
        let mut list: Vec<HitEntry> = scores
            .into_iter()
            .enumerate()
            .map(|(index, score)| HitEntry { index, score })
            .collect();
        // stable sort keeps input order on equal scores
        list.sort_by(|a, b| b.score.total_cmp(&a.score));
        Hits { list }
    }

    /// Ranked document indices, best first.
    pub fn indices(&self) -> Vec<usize> {
        self.list.iter().map(|hit| hit.index).collect()
    }

    /// Re-order the caller's raw texts by rank.
    pub fn texts<'a, T>(&self, documents: &'a [T]) -> Vec<&'a str>
    where
        T: AsRef<str>,
    {
        self.list
            .iter()
            .map(|hit| documents[hit.index].as_ref())
            .collect()
    }
}

/// Extended cosine scores, one per document row.
///
/// # Arguments
/// * `tfp` - TF-P matrix of the fitted documents
/// * `query_tf` - TF-P vector of the expanded query (vocabulary length)
/// * `document_sizes` - term count of each normalized document
///
/// # Returns
/// * `Vec<f64>` - finite scores; degenerate quotients evaluate to 0
pub fn extended_cosine(
    tfp: &TfpMatrix,
    query_tf: &[f64],
    document_sizes: &[usize],
) -> Vec<f64> {
    // per-unit proportional adjustment: query vector over row sums,
    // applied to row i at position i (positional pairing, see module
    // docs)
    let adjustment = vector::div_pairwise(query_tf, &tfp.row_sums());
    let mut weighted = tfp.clone();
    for i in 0..weighted.rows() {
        let factor = adjustment.get(i).copied().unwrap_or(0.0);
        weighted.scale_row(i, factor);
    }

    let sizes: Vec<f64> = document_sizes.iter().map(|&s| s as f64).collect();
    let p_qd = vector::div_pairwise(query_tf, &sizes);

    (0..weighted.rows())
        .map(|i| {
            let cos = vector::cosine(weighted.row(i), query_tf);
            cos * p_qd.get(i).copied().unwrap_or(0.0)
        })
        .collect()
}

/// Score every document and return the ranked hits.
pub fn rank(tfp: &TfpMatrix, query_tf: &[f64], document_sizes: &[usize]) -> Hits {
    Hits::from_scores(extended_cosine(tfp, query_tf, document_sizes))
}
