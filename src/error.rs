use thiserror::Error;

/// Errors surfaced by the ranking pipeline.
///
/// Degenerate numeric cases (zero-norm vectors, zero denominators) are
/// not errors; they evaluate to a score contribution of `0.0`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `transform` was called before `fit_transform` established a
    /// vocabulary. This is a caller bug, not a recoverable condition.
    #[error("unfitted vectorizer: transform called before fit_transform")]
    UnfittedVectorizer,
}
