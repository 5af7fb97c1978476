use std::collections::HashSet;

/// Characters treated as term separators in addition to whitespace.
pub const PUNCTUATION: [char; 9] = ['.', ',', '!', '?', ';', ':', '"', '(', ')'];

/// Default stopword list: articles, conjunctions and common
/// prepositions that carry no ranking signal.
pub const STOP_WORDS: [&str; 17] = [
    "a", "an", "the", "and", "or", "but", "is", "in", "it", "to", "of", "for", "on", "with", "as",
    "by", "at",
];

/// Text normalizer applied to every document and query before
/// vectorization.
///
/// Lowercases, splits on whitespace and [`PUNCTUATION`], drops
/// stopwords, and rejoins the surviving terms with single spaces.
/// Pure and deterministic; no stemming or unicode normalization.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    stop_words: HashSet<String>,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor {
    /// Create a preprocessor with the default stopword list.
    pub fn new() -> Self {
        Self::with_stop_words(&STOP_WORDS)
    }

    /// Create a preprocessor with a caller-supplied stopword list.
    ///
    /// # Arguments
    /// * `words` - terms to drop after lowercasing and splitting
    pub fn with_stop_words<T>(words: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        Self {
            stop_words: words.iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }

    /// Normalize one text into a space-joined term sequence.
    pub fn preprocess(&self, text: &str) -> String {
        text.to_lowercase()
            .split(|c: char| c.is_whitespace() || PUNCTUATION.contains(&c))
            .filter(|t| !t.is_empty())
            .filter(|t| !self.stop_words.contains(*t))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        let pre = Preprocessor::new();
        assert_eq!(
            pre.preprocess("Ghana's banking sector faced a severe crisis in 2023."),
            "ghana's banking sector faced severe crisis 2023"
        );
    }

    #[test]
    fn drops_stopwords() {
        let pre = Preprocessor::new();
        assert_eq!(
            pre.preprocess("what caused the financial crisis in Ghana?"),
            "what caused financial crisis ghana"
        );
    }

    #[test]
    fn preprocess_is_idempotent() {
        let pre = Preprocessor::new();
        let inputs = [
            "The United States is a major global economy.",
            "Mathematics is a fundamental subject in education.",
            "  (punctuation):  everywhere!!  ",
        ];
        for text in inputs {
            let once = pre.preprocess(text);
            assert_eq!(pre.preprocess(&once), once);
        }
    }

    #[test]
    fn all_stopword_input_becomes_empty() {
        let pre = Preprocessor::new();
        assert_eq!(pre.preprocess("the and of, by at!"), "");
        assert_eq!(pre.preprocess(""), "");
    }

    #[test]
    fn stopword_list_is_injectable() {
        let pre = Preprocessor::with_stop_words(&["crisis"]);
        assert_eq!(
            pre.preprocess("the financial crisis"),
            "the financial"
        );
    }
}
