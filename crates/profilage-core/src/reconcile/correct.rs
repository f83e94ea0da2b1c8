use std::collections::BTreeSet;

use crate::services::FuzzyScorer;
use crate::vocab::Vocabulary;

pub const DEFAULT_CORRECTION_THRESHOLD: f64 = 80.0;

/// Replaces a candidate with its closest vocabulary entry when the
/// similarity score strictly exceeds the threshold; otherwise the candidate
/// passes through unchanged.
pub struct FuzzyCorrector<'a> {
    scorer: &'a dyn FuzzyScorer,
    threshold: f64,
}

impl<'a> FuzzyCorrector<'a> {
    #[must_use]
    pub fn new(scorer: &'a dyn FuzzyScorer) -> Self {
        Self {
            scorer,
            threshold: DEFAULT_CORRECTION_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn correct<I, S>(&self, candidates: I, vocabulary: &Vocabulary) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .map(|candidate| {
                let candidate = candidate.as_ref();
                match self.scorer.best_match(candidate, vocabulary) {
                    Some(best) if best.score > self.threshold => best.entry.to_string(),
                    _ => candidate.to_string(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::RatioScorer;
    use crate::vocab::Lexicons;

    struct FixedScorer(f64);

    impl FuzzyScorer for FixedScorer {
        fn score(&self, _a: &str, _b: &str) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_corrects_close_candidates_to_vocabulary_form() {
        let lexicons = Lexicons::french();
        let scorer = RatioScorer;
        let corrector = FuzzyCorrector::new(&scorer);

        let corrected =
            corrector.correct(["cloud computing", "pythn"], &lexicons.competencies);

        let expected: BTreeSet<String> =
            ["Cloud Computing", "Python"].iter().map(ToString::to_string).collect();
        assert_eq!(corrected, expected);
    }

    #[test]
    fn test_distant_candidates_pass_through() {
        let lexicons = Lexicons::french();
        let scorer = RatioScorer;
        let corrector = FuzzyCorrector::new(&scorer);

        let corrected = corrector.correct(["soudure à l'arc"], &lexicons.competencies);
        assert!(corrected.contains("soudure à l'arc"));
    }

    #[test]
    fn test_score_at_threshold_is_not_corrected() {
        let vocab = Vocabulary::new(["Python"]);
        let scorer = FixedScorer(80.0);
        let corrector = FuzzyCorrector::new(&scorer);

        let corrected = corrector.correct(["pythn"], &vocab);
        assert!(corrected.contains("pythn"));
    }

    #[test]
    fn test_score_above_threshold_is_corrected() {
        let vocab = Vocabulary::new(["Python"]);
        let scorer = FixedScorer(80.1);
        let corrector = FuzzyCorrector::new(&scorer);

        let corrected = corrector.correct(["pythn"], &vocab);
        assert!(corrected.contains("Python"));
        assert!(!corrected.contains("pythn"));
    }

    #[test]
    fn test_output_is_deduplicated() {
        let vocab = Vocabulary::new(["Python"]);
        let scorer = FixedScorer(95.0);
        let corrector = FuzzyCorrector::new(&scorer);

        let corrected = corrector.correct(["pythn", "pyton", "phyton"], &vocab);
        assert_eq!(corrected.len(), 1);
    }

    #[test]
    fn test_empty_vocabulary_passes_candidates_through() {
        let vocab = Vocabulary::new(Vec::<String>::new());
        let scorer = RatioScorer;
        let corrector = FuzzyCorrector::new(&scorer);

        let corrected = corrector.correct(["docker"], &vocab);
        assert!(corrected.contains("docker"));
    }
}
