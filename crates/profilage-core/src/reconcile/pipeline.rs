use std::time::Instant;

use thiserror::Error;

use crate::profile::{Identity, StructuredProfile};
use crate::services::{
    FuzzyScorer, IdentityLemmatizer, Lemmatizer, RatioScorer, Tagger, TaggerError,
};
use crate::vocab::{ConfigResult, Lexicons};

use super::clean::{clean_locations, clean_names, EntryCleaner};
use super::collect::SpanCollection;
use super::correct::{FuzzyCorrector, DEFAULT_CORRECTION_THRESHOLD};
use super::filter::{detect_formations, filter_name_leakage};
use super::languages::LanguageMatcher;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Document text is empty")]
    EmptyDocument,
    #[error("Tagger error: {0}")]
    Tagger(#[from] TaggerError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    pub raw_spans: usize,
    pub names: usize,
    pub experiences: usize,
    pub competencies: usize,
    pub formations: usize,
    pub locations: usize,
    pub languages: usize,
    pub duration_ms: u64,
}

#[derive(Debug)]
pub struct ProfileOutput {
    pub spans: SpanCollection,
    pub profile: StructuredProfile,
    pub stats: PipelineStats,
}

impl ProfileOutput {
    #[must_use]
    pub fn classifier_text(&self) -> String {
        self.profile.classifier_text()
    }
}

/// One synchronous reconciliation pass per document. Collaborator services
/// are injected once at construction and used read-only afterwards, so a
/// pipeline can be shared across worker threads as long as the tagger
/// backends themselves are reentrant.
pub struct ProfilePipeline {
    generic_tagger: Box<dyn Tagger>,
    fine_tuned_tagger: Box<dyn Tagger>,
    lemmatizer: Box<dyn Lemmatizer>,
    scorer: Box<dyn FuzzyScorer>,
    lexicons: Lexicons,
    language_matcher: LanguageMatcher,
    threshold: f64,
}

impl ProfilePipeline {
    pub fn new(
        generic_tagger: Box<dyn Tagger>,
        fine_tuned_tagger: Box<dyn Tagger>,
    ) -> ConfigResult<Self> {
        Self::with_lexicons(generic_tagger, fine_tuned_tagger, Lexicons::default())
    }

    /// Configuration boundary: vocabulary validation and pattern
    /// compilation happen here, before any document is accepted.
    pub fn with_lexicons(
        generic_tagger: Box<dyn Tagger>,
        fine_tuned_tagger: Box<dyn Tagger>,
        lexicons: Lexicons,
    ) -> ConfigResult<Self> {
        lexicons.validate()?;
        let language_matcher =
            LanguageMatcher::new(&lexicons.languages, &lexicons.language_levels)?;

        Ok(Self {
            generic_tagger,
            fine_tuned_tagger,
            lemmatizer: Box::new(IdentityLemmatizer),
            scorer: Box::new(RatioScorer),
            lexicons,
            language_matcher,
            threshold: DEFAULT_CORRECTION_THRESHOLD,
        })
    }

    #[must_use]
    pub fn with_lemmatizer(mut self, lemmatizer: Box<dyn Lemmatizer>) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    #[must_use]
    pub fn with_scorer(mut self, scorer: Box<dyn FuzzyScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn process(&self, text: &str) -> PipelineResult<ProfileOutput> {
        let start = Instant::now();

        if text.trim().is_empty() {
            return Err(PipelineError::EmptyDocument);
        }

        let mut spans = self.generic_tagger.predict(text)?;
        spans.extend(self.fine_tuned_tagger.predict(text)?);
        let collection = SpanCollection::collect(text, spans);

        let corrector =
            FuzzyCorrector::new(self.scorer.as_ref()).with_threshold(self.threshold);

        // Experience stage order is load-bearing: clean, correct, strip
        // name leakage, then detect formations on the surviving entries.
        let cleaned_experiences =
            EntryCleaner::new(&self.lexicons.experience_rules).clean(&collection.experiences);
        let corrected_experiences: Vec<String> = corrector
            .correct(&cleaned_experiences, &self.lexicons.experience_titles)
            .into_iter()
            .collect();
        let experiences = filter_name_leakage(&corrected_experiences, &collection.names);
        let formations = detect_formations(&experiences, &self.lexicons.degrees);
        tracing::debug!(
            cleaned = cleaned_experiences.len(),
            corrected = corrected_experiences.len(),
            kept = experiences.len(),
            formations = formations.len(),
            "experience reconciliation"
        );

        let cleaned_competencies = EntryCleaner::new(&self.lexicons.competency_rules)
            .with_lemmatizer(self.lemmatizer.as_ref())
            .clean(&collection.competencies);
        let competencies =
            corrector.correct(&cleaned_competencies, &self.lexicons.competencies);
        tracing::debug!(
            cleaned = cleaned_competencies.len(),
            corrected = competencies.len(),
            "competency reconciliation"
        );

        let locations: Vec<String> =
            clean_locations(&collection.locations, &self.lexicons.location_blacklist)
                .into_iter()
                .collect();
        let names = clean_names(&collection.names, &self.lexicons.name_blacklist);
        let languages = self.language_matcher.extract(text);

        let identity =
            Identity::new(names, collection.emails.clone(), collection.phones.clone());
        let profile = StructuredProfile::assemble(
            formations,
            competencies,
            experiences,
            locations,
            identity,
            languages,
        );

        let stats = PipelineStats {
            raw_spans: collection.span_count(),
            names: profile.identity.names.len(),
            experiences: profile.experiences.len(),
            competencies: profile.competencies.len(),
            formations: profile.formations.len(),
            locations: profile.locations.len(),
            languages: profile.languages.len(),
            duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        };

        Ok(ProfileOutput {
            spans: collection,
            profile,
            stats,
        })
    }

    /// Per-document failures are recorded and do not abort the batch.
    pub fn process_batch<S: AsRef<str>>(&self, texts: &[S]) -> BatchResult {
        let mut result = BatchResult::new();

        for (index, text) in texts.iter().enumerate() {
            match self.process(text.as_ref()) {
                Ok(output) => result.add_success(output),
                Err(error) => {
                    tracing::warn!(document = index, %error, "document processing failed");
                    result.add_failure(index, error);
                }
            }
        }

        result
    }
}

#[derive(Debug, Default)]
pub struct BatchResult {
    pub successful: Vec<ProfileOutput>,
    pub failed: Vec<(usize, PipelineError)>,
    pub total_stats: PipelineStats,
}

impl BatchResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn add_success(&mut self, output: ProfileOutput) {
        self.total_stats.raw_spans += output.stats.raw_spans;
        self.total_stats.names += output.stats.names;
        self.total_stats.experiences += output.stats.experiences;
        self.total_stats.competencies += output.stats.competencies;
        self.total_stats.formations += output.stats.formations;
        self.total_stats.locations += output.stats.locations;
        self.total_stats.languages += output.stats.languages;
        self.total_stats.duration_ms += output.stats.duration_ms;
        self.successful.push(output);
    }

    fn add_failure(&mut self, index: usize, error: PipelineError) {
        self.failed.push((index, error));
    }

    pub fn success_count(&self) -> usize {
        self.successful.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }
}
