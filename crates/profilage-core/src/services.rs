use thiserror::Error;

use crate::span::RawSpan;
use crate::vocab::Vocabulary;

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("Inference failed: {0}")]
    Inference(String),
}

pub type TaggerResult<T> = Result<T, TaggerError>;

/// A named-entity tagger, wrapped as an opaque call-response service.
/// Implementations that are not reentrant must be serialized externally or
/// instantiated per worker when documents are processed in parallel.
pub trait Tagger: Send + Sync {
    fn predict(&self, text: &str) -> TaggerResult<Vec<RawSpan>>;
}

pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str) -> String;
}

/// Passthrough used when no lemmatization backend is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        word.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch<'a> {
    pub entry: &'a str,
    pub score: f64,
    pub index: usize,
}

/// Approximate string similarity in [0, 100].
pub trait FuzzyScorer: Send + Sync {
    fn score(&self, a: &str, b: &str) -> f64;

    /// Scans the vocabulary in its stored order and keeps strictly better
    /// scores only, so the first of several tying entries wins. Stable for
    /// fixed inputs.
    fn best_match<'a>(&self, candidate: &str, vocabulary: &'a Vocabulary) -> Option<BestMatch<'a>> {
        let mut best: Option<BestMatch<'a>> = None;

        for (index, entry) in vocabulary.iter().enumerate() {
            let score = self.score(candidate, entry);
            if best.as_ref().is_none_or(|b| score > b.score) {
                best = Some(BestMatch { entry, score, index });
            }
        }

        best
    }
}

/// Normalized Levenshtein ratio over case-folded inputs, scaled to [0, 100].
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioScorer;

impl FuzzyScorer for RatioScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase()) * 100.0
    }
}
