/// This crate ranks a document collection against a query using a TF-P
/// Vectorizer with pseudo-relevance-feedback query expansion.
pub mod vectorizer;
pub mod utils;
pub mod error;

/// TF-P Vectorizer
/// Converts normalized texts into TF-P weighted matrices: raw term
/// counts scaled per term by the proportional weight
/// `p = ln(doc_count / df)`.
///
/// Internally, it holds the fitted state of one document set:
/// - The vocabulary, in first-seen order
/// - The proportional weight vector `p`
///
/// `fit_transform` induces that state from a document set and returns
/// the TF-P matrix; `transform` projects further texts (queries) onto
/// the frozen state, dropping out-of-vocabulary terms.
///
/// The ranking pipeline uses two independent instances, one fitted for
/// the expansion scoring pass and one for the final ranking pass, so
/// vocabularies are never mixed between passes.
pub use vectorizer::TfpVectorizer;

/// Fitted vectorizer state (vocabulary + proportional weights)
/// Frozen after a fit pass. Serializable, and convertible back into a
/// `TfpVectorizer` with `TfpVectorizer::from_fitted`.
pub use vectorizer::FittedState;

/// Text Preprocessor
/// Lowercases, splits on whitespace and a fixed punctuation set, drops
/// a fixed stopword list, and rejoins with single spaces. Pure and
/// idempotent; both the stopword and punctuation defaults are owned by
/// this component and the stopwords are injectable for tests.
pub use vectorizer::preprocess::Preprocessor;

/// Query Expander
/// Pseudo-relevance feedback: unions the terms of documents whose
/// plain cosine similarity to the query reaches the threshold
/// (default 0.65) into the query's term set.
pub use vectorizer::expand::{QueryExpander, DEFAULT_THRESHOLD};

/// Search Hits and Hit Entry structures
/// Data structures for ranked results.
/// - `Hits`: descending-by-score list with stable ties, plus helpers
///   to recover ranked indices or re-ordered raw texts
/// - `HitEntry`: one result, the original document index and its score
pub use vectorizer::evaluate::scoring::{HitEntry, Hits};

/// Ranking Pipeline
/// The end-to-end boundary surface: raw documents plus a raw query in,
/// ranked hits out. `rank_documents` runs it with default settings.
pub use vectorizer::search::{rank_documents, Pipeline};

/// Crate error type
/// The only runtime error is using `transform` before `fit_transform`;
/// degenerate numeric cases score 0 instead of erroring.
pub use error::Error;

/// Dense TF-P matrix
/// Row-major documents × vocabulary container returned by the
/// vectorizer operations.
pub use utils::math::TfpMatrix;
