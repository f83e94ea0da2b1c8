use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub fn normalize(text: &str) -> String {
    let folded: String = text
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pairs an entry's original surface form with its normalized form, keeping
/// the word lists positionally aligned so cleaning rules can test the
/// normalized word while emitting the original one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedEntry {
    pub original: String,
    pub normalized: String,
    aligned: bool,
}

impl NormalizedEntry {
    #[must_use]
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let normalized = normalize(&original);
        let aligned =
            original.split_whitespace().count() == normalized.split_whitespace().count();

        if !aligned {
            tracing::warn!(
                entry = %original,
                "word count diverged under normalization, reconstructing from normalized form"
            );
        }

        Self {
            original,
            normalized,
            aligned,
        }
    }

    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.aligned
    }

    pub fn word_count(&self) -> usize {
        self.normalized.split_whitespace().count()
    }

    /// (original, normalized) word pairs by position. When alignment was
    /// lost, the normalized words stand in for the originals.
    pub fn word_pairs(&self) -> Vec<(&str, &str)> {
        let normalized: Vec<&str> = self.normalized.split_whitespace().collect();

        if self.aligned {
            self.original
                .split_whitespace()
                .zip(normalized)
                .collect()
        } else {
            normalized.iter().map(|w| (*w, *w)).collect()
        }
    }
}
